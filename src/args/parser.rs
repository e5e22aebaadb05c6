//! Argument parser: raw argv → validated dispatches.

use crate::args::action::{Action, Invocation};
use crate::args::error::ArgError;
use crate::args::registry::{ArgumentSpec, Registry};

/// One dispatched flag and the values it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The flag as written on the command line.
    pub flag: String,
    /// Canonical short name of the matched spec.
    pub name: String,
    /// Exactly `arity` values, in order.
    pub values: Vec<String>,
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Dispatched flags, left to right. Every listed action returned success.
    pub dispatches: Vec<Dispatch>,
    /// Text emitted by actions, in emission order.
    pub output: Vec<String>,
}

impl ParseResult {
    /// Whether the spec registered under `name` (short or long) was dispatched.
    pub fn contains(&self, name: &str) -> bool {
        self.dispatches.iter().any(|d| d.name == name || d.flag == name)
    }
}

/// A flag resolved during validation, before its action runs.
struct Planned<'a> {
    index: usize,
    flag: &'a str,
    values: &'a [String],
}

/// Registration state. `Locked` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Unlocked,
    Locked,
}

/// Declares recognized flags and interprets an argument vector against them.
#[derive(Debug)]
pub struct ArgumentParser {
    program: String,
    registry: Registry,
    state: RegistryState,
}

impl ArgumentParser {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            registry: Registry::new(),
            state: RegistryState::Unlocked,
        }
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Declare an argument.
    ///
    /// The spec is stored under `short` and, when given, under `long`.
    /// Fails if either name is empty or already taken, or if the parser has
    /// already been used to parse.
    pub fn register<A>(
        &mut self,
        short: &str,
        arity: usize,
        help: &str,
        action: A,
        long: Option<&str>,
    ) -> Result<(), ArgError>
    where
        A: Action + 'static,
    {
        if self.state == RegistryState::Locked {
            return Err(ArgError::RegistryLocked {
                name: short.to_string(),
            });
        }

        self.registry.insert(ArgumentSpec {
            short: short.to_string(),
            long: long.map(str::to_string),
            arity,
            help: help.to_string(),
            action: Box::new(action),
        })
    }

    /// Help text for every registered argument.
    pub fn help(&self) -> String {
        self.registry.render_help(&self.program)
    }

    /// Parse `argv` (without the program name) and dispatch actions.
    ///
    /// The whole vector is validated before any action runs, so unknown
    /// tokens and missing values never leave earlier actions applied.
    /// Values are taken verbatim: a token that names a flag is still consumed
    /// as a value when it falls within the preceding flag's arity.
    pub fn parse<I, S>(&mut self, argv: I) -> Result<ParseResult, ArgError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state = RegistryState::Locked;

        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let plan = plan(&self.registry, &argv).inspect_err(|e| {
            tracing::warn!(error = %e, "Argument validation failed");
        })?;

        let help = self.help();
        let mut result = ParseResult::default();

        for step in plan {
            let spec = self.registry.spec_mut(step.index);

            tracing::debug!(
                flag = %step.flag,
                values = ?step.values,
                "Dispatching argument action"
            );

            let mut invocation =
                Invocation::new(step.flag, step.values, &help, &mut result.output);
            let outcome = Action::invoke(spec.action.as_mut(), &mut invocation);

            let failure = match outcome {
                Ok(true) => None,
                Ok(false) => Some(anyhow::anyhow!("action reported failure")),
                Err(e) => Some(e),
            };
            if let Some(source) = failure {
                let err = ArgError::ActionFailure {
                    flag: step.flag.to_string(),
                    source,
                };
                tracing::warn!(error = %err, "Argument action failed");
                return Err(err);
            }

            result.dispatches.push(Dispatch {
                flag: step.flag.to_string(),
                name: spec.short.clone(),
                values: step.values.to_vec(),
            });
        }

        Ok(result)
    }
}

fn plan<'a>(registry: &Registry, argv: &'a [String]) -> Result<Vec<Planned<'a>>, ArgError> {
    let mut plan = Vec::new();
    let mut rest = argv;

    while let Some((token, tail)) = rest.split_first() {
        let index = registry
            .lookup(token)
            .ok_or_else(|| ArgError::Unrecognized {
                token: token.clone(),
            })?;
        let arity = registry.get(index).map_or(0, |spec| spec.arity);

        if tail.len() < arity {
            return Err(ArgError::InsufficientArguments {
                flag: token.clone(),
                expected: arity,
                available: tail.len(),
            });
        }

        let (values, remaining) = tail.split_at(arity);
        plan.push(Planned {
            index,
            flag: token,
            values,
        });
        rest = remaining;
    }

    Ok(plan)
}
