//! Call-site reporting for startup diagnostics.

use std::fmt;

/// Source position of a caller, rendered as `file.rs:42` or
/// `file.rs:42:module::path()` when the module is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub module: Option<&'static str>,
}

impl CallSite {
    /// File name without its directories.
    pub fn file_name(&self) -> &'static str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)?;
        if let Some(module) = self.module {
            write!(f, ":{}()", module)?;
        }
        Ok(())
    }
}

/// Capture the current file, line and module path.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::call_site::CallSite {
            file: file!(),
            line: line!(),
            module: Some(module_path!()),
        }
    };
}
