use opdec_common::Span;
use smol_str::SmolStr;

/// The maximum supported template width, in bits.
pub const MAX_WIDTH: usize = 64;

/// Identifies a pattern by its position in the table.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct PatternId(pub u32);

impl PatternId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One named bit template with its derived literal constraints.
///
/// Position 0 of the template string is the most significant bit.
/// A pattern is immutable once constructed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    pub name: SmolStr,
    pub template: SmolStr,
    /// Span of the whole `NAME TEMPLATE` definition.
    pub span: Span,
    /// Span of the template text alone.
    pub template_span: Span,
    /// Bit set at every literal (non-variable) position.
    pub mask: u64,
    /// The value of the literal positions; variable positions contribute zero.
    pub value: u64,
    /// `value` with every variable position additionally set. Only the
    /// diagnostic tables use this.
    pub ones: u64,
}

/// Why a template was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateError {
    WrongWidth { expected: usize, found: usize },
    TooWide { found: usize },
    BadSymbol { symbol: char, position: usize },
}

impl Pattern {
    /// Build a pattern from a template of `width` symbols, deriving the
    /// literal mask and values. Fails if the template length differs from
    /// `width` or any symbol is not `0`, `1`, or a field letter.
    pub fn new(
        name: SmolStr,
        template: SmolStr,
        span: Span,
        template_span: Span,
        width: usize,
    ) -> Result<Self, TemplateError> {
        let found = template.len();
        if found > MAX_WIDTH {
            return Err(TemplateError::TooWide { found });
        }
        if found != width {
            return Err(TemplateError::WrongWidth {
                expected: width,
                found,
            });
        }

        let mut mask = 0u64;
        let mut value = 0u64;
        let mut ones = 0u64;
        for (position, symbol) in template.chars().enumerate() {
            let bit = 1u64 << (width - 1 - position);
            match symbol {
                '0' => mask |= bit,
                '1' => {
                    mask |= bit;
                    value |= bit;
                    ones |= bit;
                }
                c if c.is_ascii_alphabetic() => ones |= bit,
                c => {
                    return Err(TemplateError::BadSymbol {
                        symbol: c,
                        position,
                    })
                }
            }
        }

        Ok(Pattern {
            name,
            template,
            span,
            template_span,
            mask,
            value,
            ones,
        })
    }

    /// True iff `other` constrains exactly the same bits to the same values.
    pub fn is_duplicate_of(&self, other: &Pattern) -> bool {
        self.mask == other.mask && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(template: &str) -> Result<Pattern, TemplateError> {
        Pattern::new(
            SmolStr::new("PAT"),
            SmolStr::new(template),
            Span::default(),
            Span::default(),
            template.len(),
        )
    }

    #[test]
    fn masks_and_values() {
        let pat = pattern("10xx").unwrap();
        assert_eq!(pat.mask, 0b1100);
        assert_eq!(pat.value, 0b1000);
        assert_eq!(pat.ones, 0b1011);

        let pat = pattern("000111rdddddrrrr").unwrap();
        assert_eq!(pat.mask, 0b1111110000000000);
        assert_eq!(pat.value, 0b0001110000000000);
        assert_eq!(pat.ones, 0b0001111111111111);
    }

    #[test]
    fn all_literal_template() {
        let pat = pattern("1001010100001000").unwrap();
        assert_eq!(pat.mask, 0xFFFF);
        assert_eq!(pat.value, 0x9508);
        assert_eq!(pat.ones, 0x9508);
    }

    #[test]
    fn wrong_width() {
        let err = Pattern::new(
            SmolStr::new("PAT"),
            SmolStr::new("10x"),
            Span::default(),
            Span::default(),
            4,
        )
        .unwrap_err();
        assert_eq!(
            err,
            TemplateError::WrongWidth {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn too_wide() {
        let template: String = std::iter::repeat('0').take(65).collect();
        let err = pattern(&template).unwrap_err();
        assert_eq!(err, TemplateError::TooWide { found: 65 });
    }

    #[test]
    fn bad_symbol() {
        let err = pattern("10_x").unwrap_err();
        assert_eq!(
            err,
            TemplateError::BadSymbol {
                symbol: '_',
                position: 2
            }
        );
    }

    #[test]
    fn duplicate_ignores_field_letters_and_name() {
        let a = pattern("10xy").unwrap();
        let b = pattern("10qq").unwrap();
        assert!(a.is_duplicate_of(&b));

        let c = pattern("11xy").unwrap();
        assert!(!a.is_duplicate_of(&c));
    }
}
