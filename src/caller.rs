//! # Caller Tags
//!
//! A caller tag names where a log call originated, rendered as
//! `file:function[line]`. Tags are resolved at the macro expansion site via
//! [`caller_tag!`](crate::caller_tag), so the location is always the user's
//! call and never one of this crate's own wrapper functions.

use std::fmt;

const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// Location of a logging call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerTag {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallerTag {
    /// Build a tag from a source path, a fully qualified function path and a line.
    ///
    /// Only the last path segment of `file` and the last `::` segment of
    /// `function` are kept. Closure frames are skipped so a call made inside a
    /// closure is attributed to the enclosing function.
    pub fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        let file = file.rsplit(['/', '\\']).next().unwrap_or(file);

        let mut function = function;
        while let Some(outer) = function.strip_suffix(CLOSURE_SEGMENT) {
            function = outer;
        }
        let function = function.rsplit("::").next().unwrap_or(function);

        Self { file, function, line }
    }

    /// A tag for a location that could not be resolved. Renders as `""`.
    pub const fn unknown() -> Self {
        Self {
            file: "",
            function: "",
            line: 0,
        }
    }

    /// Source file basename
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Short function name
    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether the tag carries a usable location.
    pub fn is_resolved(&self) -> bool {
        !self.file.is_empty() && !self.function.is_empty()
    }
}

impl Default for CallerTag {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for CallerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_resolved() {
            return Ok(());
        }
        write!(f, "{}:{}[{}]", self.file, self.function, self.line)
    }
}

/// Resolve the [`CallerTag`] of the code invoking this macro.
///
/// ```rust
/// fn handler() -> String {
///     taglog_rs::caller_tag!().to_string()
/// }
///
/// let tag = handler();
/// assert!(tag.contains(":handler["), "{tag}");
/// ```
#[macro_export]
macro_rules! caller_tag {
    () => {
        $crate::caller::CallerTag::new(::core::file!(), $crate::function_path!(), ::core::line!())
    };
}

/// Fully qualified path of the enclosing function.
#[doc(hidden)]
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __taglog_here() {}
        fn __taglog_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __taglog_type_name_of(__taglog_here);
        name.strip_suffix("::__taglog_here").unwrap_or(name)
    }};
}
