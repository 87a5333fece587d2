use crate::schema::{Card, CardDef, CardPool, Color};
use anyhow::{bail, Context};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_JSON: &[u8] = include_bytes!("../cards.json");

/// The card pool shipped with the binary.
pub fn builtin_pool() -> CardPool {
    parse_pool(BUILTIN_JSON, "built-in cards.json").expect("built-in cards.json must be valid")
}

pub fn load_pool(path: &Path) -> anyhow::Result<CardPool> {
    let raw = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let pool = parse_pool(&raw, &path.display().to_string())?;
    log::info!("loaded {} cards from {}", pool.len(), path.display());
    Ok(pool)
}

/// Loads `path` when given, otherwise falls back to the built-in pool.
pub fn load_pool_or_builtin(path: Option<&Path>) -> anyhow::Result<CardPool> {
    match path {
        Some(path) => load_pool(path),
        None => Ok(builtin_pool()),
    }
}

pub fn parse_pool(json_bytes: &[u8], origin: &str) -> anyhow::Result<CardPool> {
    let defs: Vec<CardDef> =
        serde_json::from_slice(json_bytes).with_context(|| format!("parse {origin}"))?;
    build_pool(defs).with_context(|| format!("validate {origin}"))
}

pub fn build_pool(defs: Vec<CardDef>) -> anyhow::Result<CardPool> {
    validate_defs(&defs)?;
    let cards = defs
        .into_iter()
        .map(|def| -> anyhow::Result<Card> {
            let color = Color::from_hex(&def.color)
                .with_context(|| format!("card {:?}", def.name))?;
            Ok(Card::new(def.name, color, def.numbers))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CardPool::new(cards))
}

fn validate_defs(defs: &[CardDef]) -> anyhow::Result<()> {
    let Some(first) = defs.first() else {
        bail!("card pool is empty");
    };
    let expected = first.numbers.len();
    let mut names = HashSet::new();
    for def in defs {
        if def.name.trim().is_empty() {
            bail!("card with numbers {:?} has no name", def.numbers);
        }
        if !names.insert(def.name.as_str()) {
            bail!("duplicate card name {:?}", def.name);
        }
        if def.numbers.is_empty() {
            bail!("card {:?} has no numbers", def.name);
        }
        if def.numbers.len() != expected {
            bail!(
                "card {:?} has {} numbers, expected {} like {:?}",
                def.name,
                def.numbers.len(),
                expected,
                first.name
            );
        }
        let mut seen = HashSet::new();
        if let Some(number) = def.numbers.iter().find(|number| !seen.insert(**number)) {
            bail!("card {:?} repeats number {}", def.name, number);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, color: &str, numbers: &[u32]) -> CardDef {
        CardDef {
            name: name.to_string(),
            color: color.to_string(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn builtin_pool_is_valid() {
        let pool = builtin_pool();
        assert_eq!(pool.len(), 10);
        assert!(pool.iter().all(|card| card.numbers.len() == 9));
        assert_eq!(pool.deck().numbers(), (1..=30).collect::<Vec<u32>>().as_slice());
        assert_eq!(pool.cards()[0].name, "Red");
        assert_eq!(pool.cards()[0].color, Color::rgb(0xcc, 0x00, 0x44));
    }

    #[test]
    fn rejects_empty_pool() {
        let err = build_pool(Vec::new()).expect_err("empty pool must fail");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_repeated_number() {
        let err = build_pool(vec![def("a", "#000", &[1, 2, 1])]).expect_err("repeat");
        assert!(err.to_string().contains("repeats number 1"));
    }

    #[test]
    fn rejects_uneven_cards() {
        let err = build_pool(vec![def("a", "#000", &[1, 2, 3]), def("b", "#000", &[4, 5])])
            .expect_err("uneven");
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = build_pool(vec![def("a", "#000", &[1]), def("a", "#fff", &[2])])
            .expect_err("duplicate");
        assert!(err.to_string().contains("duplicate card name"));
    }

    #[test]
    fn rejects_bad_color_with_card_name() {
        let err = build_pool(vec![def("broken", "#zz0000", &[1])]).expect_err("bad color");
        let message = format!("{err:#}");
        assert!(message.contains("broken"), "{message}");
        assert!(message.contains("invalid color"), "{message}");
    }

    #[test]
    fn parse_error_names_origin() {
        let err = parse_pool(b"{ not json", "pool.json").expect_err("parse");
        assert!(err.to_string().contains("parse pool.json"));
    }
}
