//! Per-flag actions and the context they are invoked with.

/// Everything an action sees when its flag is dispatched.
pub struct Invocation<'a> {
    /// The flag as it appeared on the command line (short or long form).
    pub flag: &'a str,
    /// Exactly `arity` values consumed after the flag.
    pub values: &'a [String],
    help: &'a str,
    output: &'a mut Vec<String>,
}

impl<'a> Invocation<'a> {
    pub(crate) fn new(
        flag: &'a str,
        values: &'a [String],
        help: &'a str,
        output: &'a mut Vec<String>,
    ) -> Self {
        Self {
            flag,
            values,
            help,
            output,
        }
    }

    /// Rendered help for every registered argument.
    pub fn help(&self) -> &str {
        self.help
    }

    /// Queue text for the caller to print once parsing completes.
    pub fn emit(&mut self, text: impl Into<String>) {
        self.output.push(text.into());
    }
}

/// Behavior attached to a flag.
///
/// Returning `Ok(false)` or an error aborts parsing with
/// [`ArgError::ActionFailure`](crate::args::ArgError::ActionFailure).
pub trait Action {
    fn invoke(&mut self, invocation: &mut Invocation<'_>) -> anyhow::Result<bool>;
}

impl<F> Action for F
where
    F: FnMut(&mut Invocation<'_>) -> anyhow::Result<bool>,
{
    fn invoke(&mut self, invocation: &mut Invocation<'_>) -> anyhow::Result<bool> {
        self(invocation)
    }
}

/// Pin a closure to the [`Action`] signature so its argument and return
/// types are inferred at the call site.
pub fn action_fn<F>(f: F) -> F
where
    F: FnMut(&mut Invocation<'_>) -> anyhow::Result<bool>,
{
    f
}
