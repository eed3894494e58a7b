//! Labeling rules and the priority matcher.
//!
//! A [`Rule`] inspects an integer and either returns the label that should
//! replace it or declines. Rules live in a [`RuleSet`] whose insertion order
//! is the priority order: the first rule that matches wins and later rules
//! are never evaluated for that integer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A predicate over an integer that yields a replacement label when it matches.
///
/// Implemented for any `Fn(i64) -> Option<String>` closure, so ad-hoc rules
/// need no wrapper type:
///
/// ```
/// use fizzbuzz::rules::RuleSet;
///
/// let rules = RuleSet::new().with_rule(|n: i64| (n < 0).then(|| "negative".to_string()));
/// assert_eq!(rules.label_for(-4), Some("negative".to_string()));
/// ```
pub trait Rule {
    /// Returns the label for `n`, or `None` when the rule does not apply.
    fn check(&self, n: i64) -> Option<String>;
}

impl<F> Rule for F
where
    F: Fn(i64) -> Option<String>,
{
    fn check(&self, n: i64) -> Option<String> {
        self(n)
    }
}

/// Matches when every divisor divides the number evenly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisibleRule {
    pub divisors: Vec<i64>,
    pub label: String,
}

impl DivisibleRule {
    pub fn new(divisors: &[i64], label: impl Into<String>) -> Self {
        Self {
            divisors: divisors.to_vec(),
            label: label.into(),
        }
    }

    /// True if all divisors divide `n`.
    ///
    /// A zero divisor never matches; config validation rejects it up front.
    pub fn matches(&self, n: i64) -> bool {
        self.divisors
            .iter()
            .all(|&d| d != 0 && n.wrapping_rem(d) == 0)
    }
}

impl Rule for DivisibleRule {
    fn check(&self, n: i64) -> Option<String> {
        self.matches(n).then(|| self.label.clone())
    }
}

/// Ordered list of rules. Index 0 has the highest priority.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule + Send + Sync>>,
}

impl RuleSet {
    /// Create an empty rule set. Nothing ever matches it.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic rule set: "FizzBuzz" for multiples of 3 and 5, then
    /// "Fizz" for multiples of 3, then "Buzz" for multiples of 5.
    ///
    /// The combined rule comes first, otherwise it would never be reached.
    pub fn classic() -> Self {
        Self::new()
            .with_rule(DivisibleRule::new(&[3, 5], "FizzBuzz"))
            .with_rule(DivisibleRule::new(&[3], "Fizz"))
            .with_rule(DivisibleRule::new(&[5], "Buzz"))
    }

    /// Append a rule with the lowest priority so far.
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: Rule + Send + Sync + 'static,
    {
        self.push(rule);
        self
    }

    /// Append a rule with the lowest priority so far.
    pub fn push<R>(&mut self, rule: R)
    where
        R: Rule + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Label of the highest-priority matching rule, if any.
    ///
    /// Evaluates rules in order and stops at the first match.
    pub fn label_for(&self, n: i64) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.check(n))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl FromIterator<DivisibleRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = DivisibleRule>>(iter: I) -> Self {
        let mut set = Self::new();
        for rule in iter {
            set.push(rule);
        }
        set
    }
}

/// Index of the first rule in `rules` that matches `n`, or `None`.
pub fn match_rule(n: i64, rules: &RuleSet) -> Option<usize> {
    rules.rules.iter().position(|rule| rule.check(n).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_match_rule_classic() {
        let rules = RuleSet::classic();
        assert_eq!(match_rule(42, &rules), Some(1));
        assert_eq!(match_rule(43, &rules), None);
        assert_eq!(match_rule(30, &rules), Some(0));
        assert_eq!(match_rule(10, &rules), Some(2));
    }

    #[test]
    fn test_empty_rule_set_never_matches() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        for n in [-15, 0, 1, 3, 5, 15] {
            assert_eq!(match_rule(n, &rules), None);
            assert_eq!(rules.label_for(n), None);
        }
    }

    #[test]
    fn test_first_match_short_circuits() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&later_calls);
        let rules = RuleSet::new()
            .with_rule(|n: i64| (n % 2 == 0).then(|| "even".to_string()))
            .with_rule(move |_n: i64| {
                counter.fetch_add(1, Ordering::SeqCst);
                Some("always".to_string())
            });

        assert_eq!(match_rule(4, &rules), Some(0));
        assert_eq!(rules.label_for(4), Some("even".to_string()));
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);

        assert_eq!(match_rule(5, &rules), Some(1));
        assert_eq!(later_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_order_is_priority() {
        // Combined rule listed last is shadowed by the single-divisor rules
        let rules = RuleSet::new()
            .with_rule(DivisibleRule::new(&[3], "Fizz"))
            .with_rule(DivisibleRule::new(&[5], "Buzz"))
            .with_rule(DivisibleRule::new(&[3, 5], "FizzBuzz"));
        assert_eq!(rules.label_for(15), Some("Fizz".to_string()));
    }

    #[test]
    fn test_divisible_rule() {
        let rule = DivisibleRule::new(&[3, 5], "FizzBuzz");
        assert!(rule.matches(0));
        assert!(rule.matches(-30));
        assert!(!rule.matches(10));
        assert!(!DivisibleRule::new(&[0], "never").matches(0));
        assert!(DivisibleRule::new(&[-1], "any").matches(i64::MIN));
    }

    #[test]
    fn test_collect_from_divisible_rules() {
        let rules: RuleSet = vec![
            DivisibleRule::new(&[7], "Bazz"),
            DivisibleRule::new(&[2], "Even"),
        ]
        .into_iter()
        .collect();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.label_for(14), Some("Bazz".to_string()));
        assert_eq!(format!("{:?}", rules), "RuleSet { rules: 2 }");
    }
}
