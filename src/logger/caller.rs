//! Caller identity resolution
//!
//! Log lines name the type that issued them. Rust has no runtime reflection
//! over call frames, so the lookup sits behind [`CallerIdentity`]: the default
//! provider walks a captured backtrace, and builds without symbol information
//! fall back to [`UnknownCallerIdentity`] or a statically known type.

use once_cell::sync::Lazy;
use regex::Regex;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::marker::PhantomData;

/// Reports the name of the type that issued the current log call
pub trait CallerIdentity: Send + Sync {
    /// `None` when the caller cannot be determined
    fn resolve(&self) -> Option<String>;
}

/// Module path prefix shared by every frame that belongs to this crate
const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

static FRAME_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+:\s+(.+?)\s*$").expect("valid frame regex"));

static PATH_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[A-Za-z_][A-Za-z0-9_]*::)+").expect("valid path regex"));

static SYMBOL_HASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::h[0-9a-f]{16}$").expect("valid hash regex"));

/// Root paths of runtime frames that never name a caller
const RUNTIME_PREFIXES: [&str; 4] = ["core::", "std::", "alloc::", "test::"];

/// Walks the call stack to the first frame outside this crate
///
/// Demangled symbols name a generic impl by its parameters, so a caller in
/// `Inventory<u32, String>` reports `Inventory<K,V>`. Use
/// [`TypeCallerIdentity`] when concrete arguments matter.
///
/// When the frame above the facade belongs to the runtime (the caller was
/// inlined away, as in optimized builds) the caller is unresolved rather than
/// misattributed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceCallerIdentity;

impl BacktraceCallerIdentity {
    /// Create the backtrace-walking provider
    pub fn new() -> Self {
        Self
    }
}

impl CallerIdentity for BacktraceCallerIdentity {
    #[inline(never)]
    fn resolve(&self) -> Option<String> {
        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            tracing::trace!("backtrace capture unsupported, caller unresolved");
            return None;
        }

        let rendered = backtrace.to_string();
        let symbols = rendered
            .lines()
            .filter_map(|line| FRAME_SYMBOL.captures(line))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()));

        let caller = caller_symbol(symbols);
        if caller.is_none() {
            tracing::trace!("no frame above the logging facade");
        }
        caller.and_then(declaring_type)
    }
}

/// Always unresolved, for builds stripped of frame metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownCallerIdentity;

/// Backtrace walking in debug builds, unresolved in optimized ones where
/// inlining removes caller frames
pub fn default_caller_identity() -> Box<dyn CallerIdentity> {
    if cfg!(debug_assertions) {
        Box::new(BacktraceCallerIdentity::new())
    } else {
        Box::new(UnknownCallerIdentity)
    }
}

impl CallerIdentity for UnknownCallerIdentity {
    fn resolve(&self) -> Option<String> {
        None
    }
}

/// Reports a statically known type as the caller
pub struct TypeCallerIdentity<T: ?Sized> {
    _type: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> TypeCallerIdentity<T> {
    /// Create a provider reporting `T`
    pub fn new() -> Self {
        Self { _type: PhantomData }
    }
}

impl<T: ?Sized> Default for TypeCallerIdentity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> CallerIdentity for TypeCallerIdentity<T> {
    fn resolve(&self) -> Option<String> {
        Some(simple_type_name(std::any::type_name::<T>()))
    }
}

/// Strip module paths from a type name, rendering generics as `Name<A,B>`
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn simple_type_name(full: &str) -> String {
    PATH_PREFIX.replace_all(full, "").replace(", ", ",")
}

/// Picks the first symbol after the contiguous run of this crate's frames
///
/// A runtime frame in that position means the caller was inlined away.
fn caller_symbol<'a>(symbols: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut inside_crate = false;
    for symbol in symbols {
        if belongs_to_crate(symbol) {
            inside_crate = true;
        } else if inside_crate {
            return Some(symbol).filter(|symbol| !is_runtime_frame(symbol));
        }
    }
    None
}

fn is_runtime_frame(symbol: &str) -> bool {
    let path = symbol.strip_prefix('<').unwrap_or(symbol);
    RUNTIME_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
        || symbol.contains(" as core::ops::function::Fn")
}

fn belongs_to_crate(symbol: &str) -> bool {
    symbol.starts_with(CRATE_PREFIX)
        || symbol
            .strip_prefix('<')
            .is_some_and(|rest| rest.starts_with(CRATE_PREFIX))
}

/// Derive the declaring type from a demangled function symbol
///
/// Inherent methods yield their type, trait methods yield the implementing
/// type, and free functions yield their enclosing module.
fn declaring_type(symbol: &str) -> Option<String> {
    let symbol = SYMBOL_HASH.replace(symbol, "");
    let mut segments = split_path(&symbol);

    while segments
        .last()
        .is_some_and(|s| s.starts_with('{') && s.ends_with('}'))
    {
        segments.pop();
    }

    // Drop the function itself
    segments.pop()?;
    let owner = segments.pop()?;

    if let Some(qualified) = owner.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
        let self_type = qualified.split(" as ").next().unwrap_or(qualified);
        return non_empty(simple_type_name(self_type));
    }

    non_empty(simple_type_name(owner))
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() || name == "<unknown>" {
        None
    } else {
        Some(name)
    }
}

/// Split on `::` outside of angle brackets
fn split_path(symbol: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let bytes = symbol.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&symbol[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&symbol[start..]);
    segments
}
