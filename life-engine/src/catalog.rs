use crate::error::PatternError;
use crate::pattern::Pattern;

const SOUP_COLUMNS: u32 = 64;
const SOUP_ROWS: u32 = 40;
const SOUP_DENSITY: f64 = 0.35;
const SOUP_SEED: u64 = 0x5eed_11fe;

#[rustfmt::skip]
const SPACE_FILLER: &[&str] = &[
    "0000000000000000000011100011100000000000000000000",
    "0000000000000000000100100010010000000000000000000",
    "1111000000000000000000100010000000000000000001111",
    "1000100000000000000000100010000000000000000010001",
    "1000000001000000000000100010000000000001000000001",
    "0100100110010000000000000000000000000100110010010",
    "0000001000001000000011100011100000001000001000000",
    "0000001000001000000001000001000000001000001000000",
    "0000001000001000000001111111000000001000001000000",
    "0100100110010011000010000000100001100100110010010",
    "1000000001000110000111111111110000110001000000001",
    "1000100000000011000000000000000001100000000010001",
    "1111000000000001111111111111111111000000000001111",
    "0000000000000000101000000000001010000000000000000",
    "0000000000000000000111111111110000000000000000000",
    "0000000000000000000100000000010000000000000000000",
    "0000000000000000000011111111100000000000000000000",
    "0000000000000000000000001000000000000000000000000",
    "0000000000000000000011100011100000000000000000000",
    "0000000000000000000000100010000000000000000000000",
    "0000000000000000000000000000000000000000000000000",
    "0000000000000000000001110111000000000000000000000",
    "0000000000000000000001110111000000000000000000000",
    "0000000000000000000010110110100000000000000000000",
    "0000000000000000000011100011100000000000000000000",
    "0000000000000000000001000001000000000000000000000",
];

const GLIDER: &[&str] = &["010", "001", "111"];

const BLINKER: &[&str] = &["111"];

#[rustfmt::skip]
const PULSAR: &[&str] = &[
    "0011100011100",
    "0000000000000",
    "1000010100001",
    "1000010100001",
    "1000010100001",
    "0011100011100",
    "0000000000000",
    "0011100011100",
    "1000010100001",
    "1000010100001",
    "1000010100001",
    "0000000000000",
    "0011100011100",
];

#[rustfmt::skip]
const GOSPER_GLIDER_GUN: &[&str] = &[
    "000000000000000000000000100000000000",
    "000000000000000000000010100000000000",
    "000000000000110000001100000000000011",
    "000000000001000100001100000000000011",
    "110000000010000010001100000000000000",
    "110000000010001011000010100000000000",
    "000000000010000010000000100000000000",
    "000000000001000100000000000000000000",
    "000000000000110000000000000000000000",
];

const R_PENTOMINO: &[&str] = &["011", "110", "010"];

#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    pub fn builtin() -> Result<Self, PatternError> {
        let patterns = vec![
            Pattern::parse("Space filler", SPACE_FILLER, 10)?,
            Pattern::parse("Glider", GLIDER, 20)?,
            Pattern::parse("Blinker", BLINKER, 24)?,
            Pattern::parse("Pulsar", PULSAR, 16)?,
            Pattern::parse("Gosper glider gun", GOSPER_GLIDER_GUN, 8)?,
            Pattern::parse("R-pentomino", R_PENTOMINO, 6)?,
            Pattern::random_soup(
                "Random soup",
                SOUP_COLUMNS,
                SOUP_ROWS,
                SOUP_DENSITY,
                SOUP_SEED,
                8,
            )?,
        ];
        Ok(Self { patterns })
    }

    pub fn default_pattern(&self) -> &Pattern {
        &self.patterns[0]
    }

    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}
