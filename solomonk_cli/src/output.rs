use std::io::Write;

use anyhow::Result;
use solomonk_lib::Monster;

// -- JSON output --

/// Writes `monsters` as a pretty-printed JSON array (2-space indent, non-ASCII
/// left as-is) followed by a newline.
pub fn write_monsters<W: Write>(mut out: W, monsters: &[Monster]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, monsters)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(monsters: &[Monster]) -> String {
        let mut buf = Vec::new();
        write_monsters(&mut buf, monsters).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_list() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn two_space_indent_and_trailing_newline() {
        let monsters = vec![Monster {
            level_min: Some(10),
            level_max: Some(15),
            ..Monster::new(31, "Larve Bleue")
        }];
        let expected = "[\n  {\n    \"id\": 31,\n    \"name\": \"Larve Bleue\",\n    \"level_min\": 10,\n    \"level_max\": 15\n  }\n]\n";
        assert_eq!(render(&monsters), expected);
    }

    #[test]
    fn non_ascii_left_unescaped() {
        let monsters = vec![Monster {
            ecosystem: Some("Créatures des champs".into()),
            archmonster: Some("Larvalœil le Vaillant".into()),
            ..Monster::new(31, "Larve Bleue")
        }];
        let out = render(&monsters);
        assert!(out.contains("Créatures des champs"));
        assert!(out.contains("Larvalœil"));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let out = render(&[Monster::new(4, "Tofu")]);
        assert!(!out.contains("null"));
        assert!(!out.contains("hp_min"));

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0].as_object().unwrap().len(), 2);
    }

    #[test]
    fn output_parses_back_in_order() {
        let monsters = vec![Monster::new(1, "a"), Monster::new(2, "b"), Monster::new(9, "c")];
        let parsed: serde_json::Value = serde_json::from_str(&render(&monsters)).unwrap();
        let ids: Vec<u64> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 9]);
    }
}
