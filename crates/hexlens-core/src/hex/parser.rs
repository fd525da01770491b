use super::error::HexError;
use crate::MAX_BYTES;

/// Parse a hex string into up to `MAX_BYTES` bytes.
pub fn parse_hex_bytes(input: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let cleaned = trimmed
        .replace(',', " ")
        .replace('_', " ")
        .replace("0x", "")
        .replace("0X", "");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut out = Vec::new();
    if tokens.len() == 1 {
        // A single run of digits: split into pairs, no nibble padding.
        let digits: Vec<char> = tokens[0].chars().collect();
        if digits.len() % 2 != 0 {
            return Err(HexError::OddLength {
                digits: digits.len(),
            });
        }
        for pair in digits.chunks(2) {
            let token: String = pair.iter().collect();
            out.push(parse_byte_token(&token)?);
        }
    } else {
        for token in tokens {
            out.push(parse_byte_token(token)?);
        }
    }

    if out.len() > MAX_BYTES {
        return Err(HexError::TooManyBytes {
            max: MAX_BYTES,
            actual: out.len(),
        });
    }
    Ok(out)
}

fn parse_byte_token(token: &str) -> Result<u8, HexError> {
    let bad = || HexError::InvalidByte {
        token: token.to_string(),
    };

    let padded;
    let pair = if token.chars().count() == 1 {
        padded = format!("0{token}");
        &padded
    } else {
        token
    };
    if pair.len() != 2 || !pair.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    u8::from_str_radix(pair, 16).map_err(|_| bad())
}

#[cfg(test)]
mod tests {
    use super::parse_hex_bytes;
    use crate::hex::error::HexError;

    #[test]
    fn parse_accepted_separator_styles() {
        let expected = vec![0xE8, 0x08, 0xB0, 0x04, 0x00, 0x00, 0x2C, 0x01];
        let cases = [
            "E8 08 B0 04 00 00 2C 01",
            "e8,08,b0,04,00,00,2c,01",
            "E8_08_B0_04_00_00_2C_01",
            "E808B00400002C01",
        ];
        for case in cases {
            assert_eq!(parse_hex_bytes(case).unwrap(), expected, "{case}");
        }

        assert_eq!(
            parse_hex_bytes("0xE8 0x08 0xB0 0x04").unwrap(),
            vec![0xE8, 0x08, 0xB0, 0x04]
        );
    }

    #[test]
    fn parse_empty_input_yields_empty_sequence() {
        assert_eq!(parse_hex_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_hex_bytes("   ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_pads_separated_nibbles() {
        assert_eq!(parse_hex_bytes("F A").unwrap(), vec![0x0F, 0x0A]);
    }

    #[test]
    fn parse_rejects_odd_continuous_run() {
        let err = parse_hex_bytes("E808B0040").unwrap_err();
        assert!(matches!(err, HexError::OddLength { digits: 9 }));

        let err = parse_hex_bytes("F").unwrap_err();
        assert!(matches!(err, HexError::OddLength { digits: 1 }));
    }

    #[test]
    fn parse_rejects_non_hex_tokens() {
        for bad in ["G1 00", "ZZ", "11 2X", "1,2,é"] {
            let err = parse_hex_bytes(bad).unwrap_err();
            assert!(matches!(err, HexError::InvalidByte { .. }), "{bad}");
        }
    }

    #[test]
    fn parse_rejects_tokens_longer_than_a_byte() {
        let err = parse_hex_bytes("E808 B004").unwrap_err();
        match err {
            HexError::InvalidByte { token } => assert_eq!(token, "E808"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_enforces_byte_limit() {
        let err = parse_hex_bytes("11 22 33 44 55 66 77 88 99").unwrap_err();
        match err {
            HexError::TooManyBytes { max, actual } => {
                assert_eq!(max, 8);
                assert_eq!(actual, 9);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
