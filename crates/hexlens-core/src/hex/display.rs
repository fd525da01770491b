/// Canonical rendering: uppercase pairs separated by single spaces.
pub fn bytes_to_hex(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One zero-padded binary string per byte.
pub fn bytes_to_binary(data: &[u8]) -> Vec<String> {
    data.iter().map(|b| format!("{b:08b}")).collect()
}

#[cfg(test)]
mod tests {
    use super::{bytes_to_binary, bytes_to_hex};
    use crate::hex::parse_hex_bytes;

    #[test]
    fn hex_rendering_is_canonical() {
        assert_eq!(bytes_to_hex(&[0xE8, 0x08, 0xB0, 0x04]), "E8 08 B0 04");
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn parse_then_render_normalizes() {
        for input in ["e8,08,b0,04", "0xE8 0x08 0xB0 0x04", "E808B004", "e808b004"] {
            let data = parse_hex_bytes(input).unwrap();
            assert_eq!(bytes_to_hex(&data), "E8 08 B0 04", "{input}");
        }
    }

    #[test]
    fn binary_rendering_is_per_byte() {
        assert_eq!(
            bytes_to_binary(&[0xE8, 0x01]),
            vec!["11101000".to_string(), "00000001".to_string()]
        );
    }
}
