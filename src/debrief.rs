// bopo-create/src/debrief.rs
//! Lossy, bounded summaries of nested values for terminal logging.
//!
//! `debrief` walks a [`Value`] and returns a new one where:
//! - long strings and numbers are abbreviated with a trailing `...`
//! - containers past `depth` collapse into a placeholder string
//! - containers with more than `siblings` children are truncated with a
//!   synthetic "N more" marker
//!
//! The input is never touched; the same input and options always yield the
//! same output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_DEPTH: usize = 2;
pub const DEFAULT_SIBLINGS: usize = 4;
pub const DEFAULT_TRIM: usize = 30;
pub const DEFAULT_ROUND: usize = 3;

const ELLIPSIS: &str = "...";

/// JS switches number rendering to exponent form outside `[EXP_LOWER, EXP_UPPER)`.
const EXP_UPPER: f64 = 1e21;
const EXP_LOWER: f64 = 1e-6;
const MAX_FIXED_PLACES: usize = 100;

/// Integers past this magnitude lose precision as `f64` and are kept as [`Value::BigInt`].
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/* =================================== Value =================================== */

/// Any loggable value. Objects keep insertion order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    /// Arbitrary-precision integer in decimal form (optionally signed).
    BigInt(String),
    String(String),
    /// Symbol-like marker, carrying its description.
    Symbol(String),
    /// Callable reference; `None` when anonymous.
    Function(Option<String>),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Build an object from `(key, value)` pairs, keeping their order.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Serialize anything serde can describe, then wrap it.
    /// Values serde_json cannot represent (e.g. maps with non-string keys)
    /// become a short error string instead of failing.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Value::from(v),
            Err(e) => Value::String(format!("<unserializable: {e}>")),
        }
    }

    /// Lower into JSON. Markers with no JSON counterpart become strings,
    /// `undefined` and non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as J;
        match self {
            Value::Null | Value::Undefined => J::Null,
            Value::Bool(b) => J::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::BigInt(digits) => J::String(digits.clone()),
            Value::String(s) => J::String(s.clone()),
            Value::Symbol(_) | Value::Function(_) => J::String(self.to_string()),
            Value::Array(items) => J::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(entries) => J::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match v {
            J::Null => Value::Null,
            J::Bool(b) => Value::Bool(b),
            J::Number(n) => {
                if let Some(u) = n.as_u64().filter(|u| *u > MAX_SAFE_INTEGER) {
                    Value::BigInt(u.to_string())
                } else if let Some(i) = n.as_i64().filter(|i| i.unsigned_abs() > MAX_SAFE_INTEGER) {
                    Value::BigInt(i.to_string())
                } else {
                    Value::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            J::String(s) => Value::String(s),
            J::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            J::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(n) }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self { Value::Number(f64::from(n)) }
}
impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self { Value::Array(items) }
}

/// Compact, single-line rendering in the style of a JS console.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&js_number_string(*n)),
            Value::BigInt(digits) => write!(f, "{digits}n"),
            Value::String(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::Symbol(desc) => write!(f, "Symbol({desc})"),
            Value::Function(Some(name)) if !name.is_empty() => write!(f, "[Function: {name}]"),
            Value::Function(_) => f.write_str("[Function (anonymous)]"),
            Value::Array(items) => {
                if items.is_empty() {
                    return f.write_str("[]");
                }
                f.write_str("[ ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(" ]")
            }
            Value::Object(entries) => {
                if entries.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if is_plain_key(k) {
                        write!(f, "{k}: {v}")?;
                    } else {
                        write!(f, "'{}': {v}", k.replace('\'', "\\'"))?;
                    }
                }
                f.write_str(" }")
            }
        }
    }
}

/* ================================== Options ================================== */

/// Bounds applied by [`debrief`]. Field names match the camelCase keys
/// accepted in config files (`preserveRootSiblings`, `round = false`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DebriefOptions {
    /// Deepest level that is expanded; level 0 is the root.
    pub depth: usize,
    /// Children shown per container before truncating.
    pub siblings: usize,
    /// Never truncate the root object.
    pub preserve_root_siblings: bool,
    /// Characters kept from long strings and numbers.
    pub trim: usize,
    /// Decimal places numbers are rounded to; `None` keeps them as-is.
    #[serde(with = "round_or_false")]
    pub round: Option<usize>,
}

impl Default for DebriefOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            siblings: DEFAULT_SIBLINGS,
            preserve_root_siblings: false,
            trim: DEFAULT_TRIM,
            round: Some(DEFAULT_ROUND),
        }
    }
}

/// `round` is either a number of places or a boolean (`false` disables, `true` = default places).
mod round_or_false {
    use super::{Deserialize, Deserializer, Serializer, DEFAULT_ROUND};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Round {
        Places(usize),
        Toggle(bool),
    }

    pub fn serialize<S: Serializer>(round: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        match round {
            Some(places) => s.serialize_u64(*places as u64),
            None => s.serialize_bool(false),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        Ok(match Round::deserialize(d)? {
            Round::Places(places) => Some(places),
            Round::Toggle(true) => Some(DEFAULT_ROUND),
            Round::Toggle(false) => None,
        })
    }
}

/* ================================== Debrief ================================== */

/// Summarize `value` within the bounds of `opts`. Total: never fails, never mutates.
pub fn debrief(value: &Value, opts: DebriefOptions) -> Value {
    summarize(value, opts, 0)
}

fn summarize(value: &Value, opts: DebriefOptions, level: usize) -> Value {
    match value {
        Value::Null | Value::Undefined | Value::Bool(_) | Value::Symbol(_) => value.clone(),
        Value::String(s) => Value::String(trim_string(s, opts.trim)),
        Value::Number(n) => trim_number(*n, opts),
        Value::BigInt(digits) => Value::Number(parse_js_number(take_chars(digits, opts.trim))),
        Value::Function(name) => Value::String(name.clone().unwrap_or_default()),
        Value::Array(items) => summarize_array(items, opts, level),
        Value::Object(entries) => summarize_object(entries, opts, level),
    }
}

fn summarize_array(items: &[Value], opts: DebriefOptions, level: usize) -> Value {
    if level > opts.depth {
        return Value::String(format!("[ ...{} ]", items.len()));
    }
    if items.len() <= opts.siblings || level == 0 {
        return Value::Array(items.iter().map(|v| summarize(v, opts, level + 1)).collect());
    }
    // Truncated arrays recurse at the same level, unlike objects.
    let mut out: Vec<Value> = items
        .iter()
        .take(opts.siblings)
        .map(|v| summarize(v, opts, level))
        .collect();
    out.push(Value::String(format!("...{} more", items.len() - opts.siblings)));
    Value::Array(out)
}

fn summarize_object(entries: &[(String, Value)], opts: DebriefOptions, level: usize) -> Value {
    let count = entries.len();
    if level > opts.depth {
        let noun = if count == 1 { "entry" } else { "entries" };
        return Value::String(format!("{{...{count} {noun}}}"));
    }
    let keep_all = count <= opts.siblings || (opts.preserve_root_siblings && level == 0);
    let shown = if keep_all { count } else { opts.siblings };

    let mut out: Vec<(String, Value)> = entries
        .iter()
        .take(shown)
        .map(|(k, v)| (k.clone(), summarize(v, opts, level + 1)))
        .collect();
    if !keep_all {
        out.push((ELLIPSIS.to_string(), Value::String(format!("{} more", count - shown))));
    }
    Value::Object(out)
}

/* ---------------------------------- leaves ---------------------------------- */

fn trim_string(s: &str, trim: usize) -> String {
    if s.chars().count() < trim.saturating_add(ELLIPSIS.len()) {
        s.to_string()
    } else {
        format!("{}{ELLIPSIS}", take_chars(s, trim))
    }
}

fn trim_number(n: f64, opts: DebriefOptions) -> Value {
    if !n.is_finite() {
        return Value::Number(n);
    }
    let rendered = match opts.round {
        Some(places) => js_to_fixed(n, places),
        None => js_number_string(n),
    };
    if rendered.chars().count() > opts.trim.saturating_add(ELLIPSIS.len()) {
        let head = parse_js_number(take_chars(&rendered, opts.trim));
        Value::String(format!("{}{ELLIPSIS}", js_number_string(head)))
    } else {
        Value::Number(parse_js_number(&rendered))
    }
}

/* --------------------------------- helpers --------------------------------- */

fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Loose numeric parse: blank is 0, garbage is NaN.
fn parse_js_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render like JS `Number.prototype.toString`: shortest round-trip digits,
/// exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
fn js_number_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let a = n.abs();
    if a >= EXP_UPPER || a < EXP_LOWER {
        let e = format!("{n:e}");
        return match e.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => e,
        };
    }
    n.to_string()
}

/// Render like JS `Number.prototype.toFixed`: exact decimal value rounded
/// half away from zero; magnitudes from `1e21` up fall back to `toString`.
/// Places are capped at 100, the largest count JS accepts.
fn js_to_fixed(n: f64, places: usize) -> String {
    if !n.is_finite() || n.abs() >= EXP_UPPER {
        return js_number_string(n);
    }
    let places = places.min(MAX_FIXED_PLACES);
    let negative = n < 0.0;
    // every finite f64 has an exact decimal expansion within 1074 fractional digits
    let exact_prec = places + 1075;
    let exact = format!("{:.exact_prec$}", n.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(places)).collect();
    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        round_up_digits(&mut digits);
    }
    let int_len = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(std::str::from_utf8(&digits[..int_len]).unwrap_or("0"));
    if places > 0 {
        out.push('.');
        out.push_str(std::str::from_utf8(&digits[int_len..]).unwrap_or(""));
    }
    out
}

/// Add one to an ASCII decimal digit string, growing it on carry-out.
fn round_up_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER as f64 {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn is_plain_key(k: &str) -> bool {
    let mut chars = k.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/* =================================== Tests =================================== */

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn opts() -> DebriefOptions {
        DebriefOptions::default()
    }

    fn nums(range: std::ops::RangeInclusive<i32>) -> Value {
        Value::Array(range.map(Value::from).collect())
    }

    #[test]
    fn primitives_pass_through() {
        for v in [
            Value::Null,
            Value::Undefined,
            Value::Bool(true),
            Value::Symbol("id".into()),
        ] {
            assert_eq!(debrief(&v, opts()), v);
        }
    }

    #[test]
    fn short_strings_untouched_long_strings_trimmed() {
        let o = opts();
        let exact = "x".repeat(o.trim);
        assert_eq!(debrief(&Value::from(exact.as_str()), o), Value::from(exact.as_str()));

        let long = "y".repeat(o.trim + 10);
        let want = format!("{}...", "y".repeat(o.trim));
        assert_eq!(debrief(&Value::from(long), o), Value::String(want));
    }

    #[test]
    fn string_trim_counts_chars_not_bytes() {
        let o = DebriefOptions { trim: 2, ..opts() };
        assert_eq!(debrief(&Value::from("héllo"), o), Value::from("hé..."));
        assert_eq!(debrief(&Value::from("héy"), o), Value::from("héy"));
    }

    #[test]
    fn numbers_round_or_not() {
        let pi = Value::Number(3.14159265);
        let two = DebriefOptions { round: Some(2), ..opts() };
        assert_eq!(debrief(&pi, two), Value::Number(3.14));
        let raw = DebriefOptions { round: None, ..opts() };
        assert_eq!(debrief(&pi, raw), Value::Number(3.14159265));
        assert_eq!(debrief(&pi, opts()), Value::Number(3.142));
    }

    #[test]
    fn long_numbers_become_marked_prefix() {
        let o = DebriefOptions { trim: 5, ..opts() };
        assert_eq!(debrief(&Value::Number(123456.789), o), Value::from("12345..."));
        // fits within trim + 3
        assert_eq!(debrief(&Value::Number(12.5), o), Value::Number(12.5));
    }

    #[test]
    fn huge_trim_does_not_overflow() {
        let o = DebriefOptions { trim: usize::MAX, ..opts() };
        assert_eq!(debrief(&Value::from("hello"), o), Value::from("hello"));
        assert_eq!(debrief(&Value::Number(3.5), o), Value::Number(3.5));
    }

    #[test]
    fn rounding_ties_go_away_from_zero() {
        let zero = DebriefOptions { round: Some(0), ..opts() };
        let two = DebriefOptions { round: Some(2), ..opts() };
        assert_eq!(debrief(&Value::Number(2.5), zero), Value::Number(3.0));
        assert_eq!(debrief(&Value::Number(-2.5), zero), Value::Number(-3.0));
        assert_eq!(debrief(&Value::Number(0.125), two), Value::Number(0.13));
        assert_eq!(debrief(&Value::Number(9.995), two), Value::Number(9.99));
        assert_eq!(debrief(&Value::Number(99.5), zero), Value::Number(100.0));
    }

    #[test]
    fn to_fixed_matches_js() {
        assert_eq!(js_to_fixed(1.005, 2), "1.00");
        assert_eq!(js_to_fixed(0.5, 0), "1");
        assert_eq!(js_to_fixed(-0.0001, 2), "-0.00");
        assert_eq!(js_to_fixed(123.456, 1), "123.5");
        assert_eq!(js_to_fixed(1e21, 3), "1e+21");
    }

    #[test]
    fn exponent_range_numbers_pass_through() {
        assert_eq!(debrief(&Value::Number(1e300), opts()), Value::Number(1e300));
        let raw = DebriefOptions { round: None, ..opts() };
        assert_eq!(debrief(&Value::Number(1e-40), raw), Value::Number(1e-40));
        assert_eq!(debrief(&Value::Number(-2.5e25), raw), Value::Number(-2.5e25));
    }

    #[test]
    fn number_strings_follow_js_thresholds() {
        assert_eq!(js_number_string(1e21), "1e+21");
        assert_eq!(js_number_string(1e20), "100000000000000000000");
        assert_eq!(js_number_string(1.5e-7), "1.5e-7");
        assert_eq!(js_number_string(0.000001), "0.000001");
        assert_eq!(js_number_string(-1e300), "-1e+300");
        assert_eq!(Value::Number(1e300).to_string(), "1e+300");
    }

    #[test]
    fn bigint_prefix_to_number() {
        let o = DebriefOptions { trim: 4, ..opts() };
        assert_eq!(debrief(&Value::BigInt("987654321".into()), o), Value::Number(9876.0));
        match debrief(&Value::BigInt("-5".into()), DebriefOptions { trim: 1, ..opts() }) {
            Value::Number(n) => assert!(n.is_nan()),
            other => panic!("expected NaN, got {other:?}"),
        }
    }

    #[test]
    fn functions_become_names() {
        assert_eq!(debrief(&Value::Function(Some("main".into())), opts()), Value::from("main"));
        assert_eq!(debrief(&Value::Function(None), opts()), Value::from(""));
    }

    #[test]
    fn root_array_is_never_truncated() {
        let v = nums(1..=6);
        assert_eq!(debrief(&v, opts()), v);
    }

    #[test]
    fn nested_array_truncates_with_marker() {
        let o = opts();
        let inner = nums(1..=(o.siblings as i32 + 1));
        // root (0) -> wrapper (1) -> inner (2 == depth)
        let v = Value::Array(vec![Value::Array(vec![inner])]);
        let out = debrief(&v, o);
        let Value::Array(l1) = out else { panic!("root array") };
        let Value::Array(l2) = &l1[0] else { panic!("level 1") };
        let Value::Array(inner) = &l2[0] else { panic!("level 2 should be expanded") };
        assert_eq!(inner.len(), o.siblings + 1);
        assert_eq!(inner.last(), Some(&Value::from("...1 more")));
    }

    #[test]
    fn truncated_array_children_stay_on_same_level() {
        // depth 1: children of a truncated level-1 array are still level 1, so they expand
        let o = DebriefOptions { depth: 1, siblings: 1, ..opts() };
        let v = Value::Array(vec![Value::Array(vec![
            Value::Array(vec![Value::from(1)]),
            Value::from(2),
        ])]);
        let want = Value::Array(vec![Value::Array(vec![
            Value::Array(vec![Value::from(1)]),
            Value::from("...1 more"),
        ])]);
        assert_eq!(debrief(&v, o), want);
    }

    #[test]
    fn object_truncates_at_root_unless_preserved() {
        let v = Value::object([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
        let want = Value::object([
            ("a", Value::from(1)),
            ("b", Value::from(2)),
            ("c", Value::from(3)),
            ("d", Value::from(4)),
            ("...", Value::from("1 more")),
        ]);
        assert_eq!(debrief(&v, opts()), want);

        let keep = DebriefOptions { preserve_root_siblings: true, ..opts() };
        assert_eq!(debrief(&v, keep), v);
    }

    #[test]
    fn object_two_over_reports_two_more() {
        let o = opts();
        let v = Value::object((0..o.siblings + 2).map(|i| (format!("k{i}"), Value::from(i as i32))));
        let Value::Object(out) = debrief(&v, o) else { panic!("object") };
        assert_eq!(out.len(), o.siblings + 1);
        assert_eq!(out.last(), Some(&("...".to_string(), Value::from("2 more"))));
    }

    #[test]
    fn containers_past_depth_collapse() {
        let o = DebriefOptions { depth: 0, ..opts() };
        let v = Value::Array(vec![
            nums(1..=3),
            Value::object([("only", 1)]),
            Value::object([("a", 1), ("b", 2)]),
        ]);
        let want = Value::Array(vec![
            Value::from("[ ...3 ]"),
            Value::from("{...1 entry}"),
            Value::from("{...2 entries}"),
        ]);
        assert_eq!(debrief(&v, o), want);
    }

    #[test]
    fn default_depth_expands_three_levels() {
        let v = Value::from(json!({"l1": {"l2": {"l3": {"l4": true}}}}));
        let out = debrief(&v, opts()).to_json();
        assert_eq!(out, json!({"l1": {"l2": {"l3": "{...1 entry}"}}}));
    }

    #[test]
    fn input_untouched_and_output_deterministic() {
        let v = Value::from(json!({
            "name": "a very long package name that goes on and on",
            "deps": ["a", "b", "c", "d", "e", "f"],
            "nested": {"x": [1.23456, {"y": [1, 2, 3, 4, 5]}]},
        }));
        let before = v.clone();
        let first = debrief(&v, opts());
        let second = debrief(&v, opts());
        assert_eq!(v, before);
        assert_eq!(first, second);
    }

    #[test]
    fn json_big_integers_become_bigint() {
        let v = Value::from(json!(u64::MAX));
        assert_eq!(v, Value::BigInt(u64::MAX.to_string()));
        assert_eq!(Value::from(json!(42)), Value::Number(42.0));
    }

    #[test]
    fn display_is_compact() {
        let v = Value::object([
            ("name", Value::from("pkg")),
            ("it's", Value::Array(vec![Value::from(1), Value::Null])),
            ("f", Value::Function(None)),
        ]);
        assert_eq!(
            v.to_string(),
            "{ name: 'pkg', 'it\\'s': [ 1, null ], f: [Function (anonymous)] }"
        );
    }

    #[test]
    fn options_accept_round_false() {
        let o: DebriefOptions = serde_json::from_value(json!({"round": false, "siblings": 2})).unwrap();
        assert_eq!(o.round, None);
        assert_eq!(o.siblings, 2);
        assert_eq!(o.depth, DEFAULT_DEPTH);

        let o: DebriefOptions = serde_json::from_value(json!({"round": 1, "preserveRootSiblings": true})).unwrap();
        assert_eq!(o.round, Some(1));
        assert!(o.preserve_root_siblings);
    }
}
