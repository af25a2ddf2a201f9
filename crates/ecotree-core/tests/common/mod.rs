use ecotree_core::OpeningRecord;

/// Build a record from raw fields, panicking on blank input
#[allow(dead_code)]
pub fn record(eco: &str, name: &str, pgn: &str) -> OpeningRecord {
    OpeningRecord::try_new(eco, name, pgn).unwrap()
}

/// A small slice of a real opening table, in file order
///
/// Covers a named family, unnamed families, repeated exact names with
/// different lengths, and a three-level chain.
#[allow(dead_code)]
pub fn sample_records() -> Vec<OpeningRecord> {
    vec![
        record("B20", "Sicilian Defense", "1. e4 c5"),
        record("B90", "Sicilian Defense: Najdorf Variation", "1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 a6"),
        record("B80", "Sicilian Defense: Scheveningen Variation, English Attack", "1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 e6 6. Be3 a6 7. f3"),
        record("B90", "Sicilian Defense: Najdorf Variation, English Attack", "1. e4 c5 2. Nf3 d6 3. d4 cxd4 4. Nxd4 Nf6 5. Nc3 a6 6. Be3 e5 7. Nb3 Be6 8. f3"),
        record("C50", "Italian Game", "1. e4 e5 2. Nf3 Nc6 3. Bc4"),
        record("C53", "Italian Game: Giuoco Piano", "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. c3"),
        record("C54", "Italian Game: Giuoco Piano", "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. c3 Nf6 5. d4"),
        record("D00", "Queen's Pawn Game: Accelerated London System", "1. d4 d5 2. Bf4"),
        record("A45", "Queen's Pawn Game: Accelerated London System", "1. d4 Nf6 2. Bf4"),
    ]
}
