//! The airport dictionary walkthrough.
//!
//! A tour is a list of [`Step`]s applied in order to an
//! [`OrderedMap`] of airport codes to airport names. Each step is logged
//! together with its result and the dictionary length afterwards.

use std::fmt;

use dictionaries::dictionary::OrderedMap;

/// Airport code to airport name.
pub type Airports = OrderedMap<String, String>;

/// One dictionary operation of the tour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Insert or overwrite `code`.
    Set {
        /// Airport code.
        code: &'static str,
        /// Airport name.
        name: &'static str,
    },
    /// Insert or overwrite `code`, reporting the name it replaced.
    UpdateValue {
        /// Airport code.
        code: &'static str,
        /// Airport name.
        name: &'static str,
    },
    /// Assign an optional name; `None` removes the code.
    SetOrRemove {
        /// Airport code.
        code: &'static str,
        /// Airport name, or `None` to remove.
        name: Option<&'static str>,
    },
    /// Remove `code`, reporting the removed name.
    Remove {
        /// Airport code.
        code: &'static str,
    },
    /// Look `code` up.
    Lookup {
        /// Airport code.
        code: &'static str,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set { code, name } => write!(formatter, "set {code} = {name}"),
            Self::UpdateValue { code, name } => write!(formatter, "update_value {code} = {name}"),
            Self::SetOrRemove {
                code,
                name: Some(name),
            } => write!(formatter, "set_or_remove {code} = Some({name})"),
            Self::SetOrRemove { code, name: None } => {
                write!(formatter, "set_or_remove {code} = None")
            }
            Self::Remove { code } => write!(formatter, "remove {code}"),
            Self::Lookup { code } => write!(formatter, "get {code}"),
        }
    }
}

/// The result of applying one [`Step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// The step that was applied.
    pub step: Step,
    /// Previous, removed or looked-up value, depending on the step.
    pub value: Option<String>,
    /// Dictionary length after the step.
    pub length: usize,
}

/// A finished tour: the final dictionary and every step's outcome.
#[derive(Clone, Debug)]
pub struct Tour {
    /// Dictionary after the last step.
    pub airports: Airports,
    /// Outcomes in step order.
    pub outcomes: Vec<StepOutcome>,
}

/// The dictionary every tour starts from.
pub fn initial_airports() -> Airports {
    [("TYO", "Tokyo"), ("DUB", "Dublin")]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

/// The walkthrough steps.
pub fn airport_steps() -> Vec<Step> {
    vec![
        Step::Set {
            code: "LHR",
            name: "London",
        },
        Step::Set {
            code: "LHR",
            name: "London Heathrow",
        },
        Step::UpdateValue {
            code: "TYO",
            name: "Tokyo International",
        },
        Step::SetOrRemove {
            code: "DUB",
            name: None,
        },
        Step::Lookup { code: "DUB" },
        Step::Remove { code: "APL" },
        Step::Lookup { code: "LHR" },
    ]
}

/// Applies `step` to `airports` and returns the value it reports.
pub fn apply(airports: &mut Airports, step: &Step) -> Option<String> {
    match *step {
        Step::Set { code, name } => {
            airports.set(code.to_string(), name.to_string());
            None
        }
        Step::UpdateValue { code, name } => {
            airports.update_value(code.to_string(), name.to_string())
        }
        Step::SetOrRemove { code, name } => {
            let previous = airports.get(code).cloned();
            airports.set_or_remove(code.to_string(), name.map(str::to_string));
            previous
        }
        Step::Remove { code } => airports.remove(code),
        Step::Lookup { code } => airports.get(code).cloned(),
    }
}

/// Runs `steps` against the initial dictionary, logging each one.
pub fn run(steps: &[Step]) -> Tour {
    let mut airports = initial_airports();
    tracing::info!(length = airports.len(), %airports, "starting dictionary");

    let outcomes = steps
        .iter()
        .map(|step| {
            let value = apply(&mut airports, step);
            let length = airports.len();
            match &value {
                Some(value) => tracing::info!(%step, value = %value, length, "applied"),
                None => tracing::info!(%step, value = "<absent>", length, "applied"),
            }
            StepOutcome {
                step: step.clone(),
                value,
                length,
            }
        })
        .collect();

    Tour { airports, outcomes }
}

/// Logs every pair, then the keys, then the values.
pub fn log_listing(airports: &Airports) {
    for (position, (code, name)) in airports.iter().enumerate() {
        tracing::info!("Airport {}: {code} ({name})", position + 1);
    }

    let codes: Vec<&str> = airports.keys().map(String::as_str).collect();
    tracing::debug!(?codes, "airport codes");

    let names: Vec<&str> = airports.values().map(String::as_str).collect();
    tracing::debug!(?names, "airport names");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_initial_airports() {
        let airports = initial_airports();
        assert_eq!(airports.len(), 2);
        assert_eq!(airports.get("TYO").map(String::as_str), Some("Tokyo"));
    }

    #[rstest]
    #[case(Step::Set { code: "LHR", name: "London" }, "set LHR = London")]
    #[case(Step::SetOrRemove { code: "DUB", name: None }, "set_or_remove DUB = None")]
    #[case(Step::SetOrRemove { code: "DUB", name: Some("Dublin") }, "set_or_remove DUB = Some(Dublin)")]
    #[case(Step::Lookup { code: "TYO" }, "get TYO")]
    fn test_step_display(#[case] step: Step, #[case] expected: &str) {
        assert_eq!(step.to_string(), expected);
    }

    #[rstest]
    fn test_set_or_remove_reports_previous() {
        let mut airports = initial_airports();
        let step = Step::SetOrRemove {
            code: "DUB",
            name: None,
        };
        assert_eq!(apply(&mut airports, &step).as_deref(), Some("Dublin"));
        assert_eq!(apply(&mut airports, &step), None);
    }
}
