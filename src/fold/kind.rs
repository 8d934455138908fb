//! Combinator kinds and their connectives.

/// Runtime view of a combinator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// At least one element satisfies the relation.
    Any,
    /// Every element satisfies the relation.
    All,
    /// No element satisfies the relation.
    None,
}

impl Quantifier {
    /// Name used when printing a combinator.
    pub const fn name(self) -> &'static str {
        match self {
            Quantifier::Any => "any_of",
            Quantifier::All => "all_of",
            Quantifier::None => "none_of",
        }
    }
}

/// Type-level combinator kind.
///
/// A fold stops at the first element whose result equals `DECISIVE`; the
/// overall answer is then `settle(DECISIVE)`, and `settle(!DECISIVE)` when
/// every element was visited.
pub trait Kind: 'static {
    const QUANTIFIER: Quantifier;

    /// Per-element result that settles the fold.
    const DECISIVE: bool;

    /// Whether the folded result is negated.
    const NEGATED: bool;

    /// Printed name.
    const NAME: &'static str = Self::QUANTIFIER.name();

    #[inline(always)]
    fn settle(reached: bool) -> bool {
        reached != Self::NEGATED
    }
}

/// Disjunction: `any_of`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Or;

/// Conjunction: `all_of`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct And;

/// Negated disjunction: `none_of`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nor;

impl Kind for Or {
    const QUANTIFIER: Quantifier = Quantifier::Any;
    const DECISIVE: bool = true;
    const NEGATED: bool = false;
}

impl Kind for And {
    const QUANTIFIER: Quantifier = Quantifier::All;
    const DECISIVE: bool = false;
    const NEGATED: bool = false;
}

impl Kind for Nor {
    const QUANTIFIER: Quantifier = Quantifier::None;
    const DECISIVE: bool = true;
    const NEGATED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Folds a plain slice the way the tuple engine does.
    fn fold<K: Kind>(results: &[bool]) -> bool {
        for &r in results {
            if r == K::DECISIVE {
                return K::settle(K::DECISIVE);
            }
        }
        K::settle(!K::DECISIVE)
    }

    #[test]
    fn test_truth_tables() {
        let cases: [&[bool]; 6] = [&[], &[true], &[false], &[true, false], &[false, false], &[true, true]];
        for results in cases {
            let any = results.iter().any(|&r| r);
            let all = results.iter().all(|&r| r);
            assert_eq!(fold::<Or>(results), any);
            assert_eq!(fold::<And>(results), all);
            assert_eq!(fold::<Nor>(results), !any);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Or::NAME, "any_of");
        assert_eq!(And::NAME, "all_of");
        assert_eq!(Nor::NAME, "none_of");
    }
}
