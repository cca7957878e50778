/*!
The wire form of a clause.

A clause is written as the signed decimal integer forms of its literals, each followed by a space, and terminated by `0`.
A literal on atom *a* is written as *a + 1* if positive, and *-(a + 1)* if negative.
Unit clauses share the same grammar, and so `-3 0` is the unit clause on the negation of atom 2.

No canonicalisation takes place, the order of literals is preserved and duplicate literals are kept.

```rust
# use otter_exchange::codec;
# use otter_exchange::structures::literal::{ABLiteral, Literal};
let clause = vec![ABLiteral::new(2, true), ABLiteral::new(3, false)];
let record = codec::encode_clause(&clause);
assert_eq!(record, "3 -4 0");
assert_eq!(codec::decode(&record), Ok(clause));
```

Each record holds exactly one clause, and so a record with any token after the terminating `0` is malformed.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The wire form of a clause.
pub fn encode_clause(literals: &[CLiteral]) -> String {
    let mut record = String::with_capacity(literals.len() * 4 + 1);
    for literal in literals {
        record.push_str(&literal.as_int().to_string());
        record.push(' ');
    }
    record.push('0');
    record
}

/// The wire form of a unit clause.
pub fn encode_unit(literal: CLiteral) -> String {
    encode_clause(&[literal])
}

/// The literal with the given (non-zero) wire form.
pub fn literal_from_int(int: i64) -> Result<CLiteral, err::ParseError> {
    let atom = match int.unsigned_abs().checked_sub(1) {
        Some(atom) => Atom::try_from(atom).map_err(|_| err::ParseError::AtomOverflow(int))?,
        None => return Err(err::ParseError::AtomOverflow(int)),
    };
    Ok(CLiteral::new(atom, int > 0))
}

/// Decodes a record to a fresh clause.
pub fn decode(record: &str) -> Result<CClause, err::ParseError> {
    let mut clause = CClause::default();
    decode_into(record, &mut clause)?;
    Ok(clause)
}

/// Decodes a record, extending `clause` with the literals of the record.
///
/// The clause is not cleared, as `clause` is intended to be a buffer reused across records.
///
/// On an error the clause may contain some prefix of the literals of the record.
pub fn decode_into(record: &str, clause: &mut CClause) -> Result<(), err::ParseError> {
    let mut tokens = record.split_whitespace();

    #[allow(clippy::while_let_on_iterator)]
    while let Some(token) = tokens.next() {
        let int = match token.parse::<i64>() {
            Ok(int) => int,
            Err(_) => {
                log::error!(target: targets::CODEC, "Unparsable token '{token}' in '{record}'");
                return Err(err::ParseError::Token(token.to_string()));
            }
        };

        if int == 0 {
            return match tokens.next() {
                None => Ok(()),
                Some(trailing) => {
                    log::error!(target: targets::CODEC, "Token '{trailing}' after termination of '{record}'");
                    Err(err::ParseError::TrailingToken)
                }
            };
        }

        clause.push(literal_from_int(int)?);
    }

    log::error!(target: targets::CODEC, "Unterminated record '{record}'");
    Err(err::ParseError::Unterminated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn lit(int: i64) -> CLiteral {
        literal_from_int(int).unwrap()
    }

    #[test]
    fn encoding() {
        assert_eq!(encode_clause(&[lit(1), lit(-2), lit(3)]), "1 -2 3 0");
        assert_eq!(encode_unit(lit(-7)), "-7 0");
        assert_eq!(encode_unit(lit(-7)), encode_clause(&[lit(-7)]));
        assert_eq!(encode_clause(&[]), "0");
    }

    #[test]
    fn encoding_wide_literals() {
        let clause = [lit(-1_000_000), lit(2_000_000_000), lit(9)];
        assert_eq!(encode_clause(&clause), "-1000000 2000000000 9 0");
        assert_eq!(decode("-1000000 2000000000 9 0"), Ok(clause.to_vec()));
    }

    #[test]
    fn encoding_keeps_order_and_repetition() {
        assert_eq!(encode_clause(&[lit(5), lit(-1), lit(5)]), "5 -1 5 0");
    }

    #[test]
    fn zero_indexed_atoms() {
        let literal = lit(-5);
        assert_eq!(literal.atom(), 4);
        assert!(!literal.polarity());

        assert_eq!(CLiteral::new(0, true).as_int(), 1);
    }

    #[test]
    fn decoding() {
        assert_eq!(decode("1 -2 3 0"), Ok(vec![lit(1), lit(-2), lit(3)]));
        assert_eq!(decode("  4\t-9   0 "), Ok(vec![lit(4), lit(-9)]));
        assert_eq!(decode("0"), Ok(vec![]));
    }

    #[test]
    fn trailing_token() {
        assert_eq!(decode("3 -4 0 7 0"), Err(err::ParseError::TrailingToken));
        assert_eq!(decode("3 0 0"), Err(err::ParseError::TrailingToken));
    }

    #[test]
    fn unterminated() {
        assert_eq!(decode("3 -4"), Err(err::ParseError::Unterminated));
        assert_eq!(decode(""), Err(err::ParseError::Unterminated));
    }

    #[test]
    fn bad_tokens() {
        assert_eq!(
            decode("3 x 0"),
            Err(err::ParseError::Token("x".to_string()))
        );

        let too_large = Atom::MAX as i64 + 2;
        assert_eq!(
            decode(&format!("{too_large} 0")),
            Err(err::ParseError::AtomOverflow(too_large))
        );
    }

    #[test]
    fn buffer_reuse() {
        let mut buffer = CClause::default();
        assert!(decode_into("1 2 0", &mut buffer).is_ok());
        buffer.clear();
        assert!(decode_into("-3 0", &mut buffer).is_ok());
        assert_eq!(buffer, vec![lit(-3)]);
    }

    #[test]
    fn random_round_trips() {
        let mut rng = rand::thread_rng();

        for _ in 0..256 {
            let length = rng.gen_range(1..48);
            let clause: CClause = (0..length)
                .map(|_| CLiteral::new(rng.gen_range(0..Atom::MAX), rng.gen_bool(0.5)))
                .collect();

            assert_eq!(decode(&encode_clause(&clause)), Ok(clause));
        }
    }
}
