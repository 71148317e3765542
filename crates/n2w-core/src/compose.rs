//! Splitting a magnitude into vocabulary cards and folding them back
//! together with the locale's merge rule.
//!
//! # Invariants
//!
//! 1. **Values follow the merge**: the folded fragment's value is whatever
//!    the locale's merge made of the card values. It equals the input only
//!    for a merge that multiplies when a larger card follows; with an
//!    additive merge just the text is meaningful.
//!
//! 2. **Left-to-right fold**: a group is folded only after each of its
//!    sub-groups has been folded to a single fragment, and always with the
//!    more significant fragment as `current`.
//!
//! 3. **Determinism**: composing the same value twice yields identical text.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use n2w_types::{ConvertError, ConvertResult, Fragment};

use crate::locale::NumeralLocale;

/// One node of a split: a single card, or a nested group to fold first.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Term {
    Word(Fragment),
    Group(Vec<Term>),
}

/// Builds the cardinal fragment for a magnitude using one locale.
pub struct NumeralComposer<'a, L: NumeralLocale + ?Sized> {
    locale: &'a L,
}

impl<'a, L: NumeralLocale + ?Sized> NumeralComposer<'a, L> {
    pub fn new(locale: &'a L) -> Self {
        Self { locale }
    }

    /// Compose the spelled-out fragment for `value`.
    ///
    /// Does not check the locale's magnitude limit; callers go through
    /// [`crate::int_to_cardinal`] for that.
    pub fn compose(&self, value: &BigUint) -> ConvertResult<Fragment> {
        let terms = self.split(value)?;
        let fragment = self
            .fold(terms)
            .ok_or_else(|| ConvertError::IncompleteVocabulary(value.clone()))?;
        trace!(lang = self.locale.lang(), %value, text = fragment.text(), "composed");
        Ok(fragment)
    }

    /// Split `value` around the largest card not exceeding it:
    /// `[multiplier, card, remainder]`, where the multiplier is the locale's
    /// "one" when it is exactly 1 and the remainder is omitted when zero.
    fn split(&self, value: &BigUint) -> ConvertResult<Vec<Term>> {
        let vocabulary = self.locale.vocabulary();
        let (card, word) = vocabulary
            .largest_at_most(value)
            .ok_or_else(|| ConvertError::IncompleteVocabulary(value.clone()))?;

        let (div, rem) = if value.is_zero() {
            (BigUint::one(), BigUint::zero())
        } else {
            (value / card, value % card)
        };

        let mut out = Vec::with_capacity(3);
        if div.is_one() {
            let one = vocabulary
                .word(&div)
                .ok_or_else(|| ConvertError::IncompleteVocabulary(BigUint::one()))?;
            out.push(Term::Word(Fragment::new(one, 1u32)));
        } else if div == *value {
            // Only the unit card is left: tally it.
            let count = div
                .to_usize()
                .ok_or_else(|| ConvertError::IncompleteVocabulary(value.clone()))?;
            return Ok(vec![Term::Word(Fragment::new(word.repeat(count), value.clone()))]);
        } else {
            out.push(Term::Group(self.split(&div)?));
        }

        out.push(Term::Word(Fragment::new(word, card.clone())));

        if !rem.is_zero() {
            out.push(Term::Group(self.split(&rem)?));
        }
        Ok(out)
    }

    fn fold(&self, terms: Vec<Term>) -> Option<Fragment> {
        let mut resolved = terms.into_iter().filter_map(|term| self.resolve(term));
        let first = resolved.next()?;
        Some(resolved.fold(first, |current, next| {
            let merged = self.locale.merge(current, next);
            trace!(text = merged.text(), value = %merged.value(), "merged");
            merged
        }))
    }

    fn resolve(&self, term: Term) -> Option<Fragment> {
        match term {
            Term::Word(fragment) => Some(fragment),
            Term::Group(terms) => self.fold(terms),
        }
    }
}
