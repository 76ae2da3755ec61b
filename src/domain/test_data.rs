/// Valid postal codes as users type them, keyed by ISO country code.
pub const VALID_POSTAL_CODES: &[(&str, &str)] = &[
    // United Kingdom, one per variant
    ("GB", "EC1A 1BB"),
    ("GB", "W1A 1HQ"),
    ("GB", "M1 1AE"),
    ("GB", "B33 8TH"),
    ("GB", "CR2 6XH"),
    ("GB", "DN55 1PT"),
    ("UK", "sw1a 2aa"),
    ("GB", "EC1A 1"),
    // Alphanumeric formats
    ("CA", "K1A 0B1"),
    ("CA", "h0h0h0"),
    ("MT", "VLT 1117"),
    ("MT", "PLA-1235"),
    // Numeric formats with their own adapters
    ("NL", "1012 AB"),
    ("NL", "9999"),
    ("PT", "1000-001"),
    ("PT", "2660"),
    ("BB", "BB17000"),
    ("BB", "11000"),
    // Plain numeric formats
    ("AT", "1010"),
    ("BE", "B-1000"),
    ("CH", "8001"),
    ("DE", "10115"),
    ("DK", "DK-2100"),
    ("ES", "28013"),
    ("FI", "FI-00100"),
    ("FR", "75001"),
    ("FR", "MC 98000"),
    ("IN", "110001"),
    ("IT", "I-00118"),
    ("JP", "100-0001"),
    ("NO", "0150"),
    ("PL", "00-950"),
    ("RU", "101000"),
    ("RU", "101"),
    ("SE", "114 55"),
    ("US", "20500"),
    ("US", "20500-0003"),
    // Default alphanumeric format
    ("IE", "D02 X285"),
    ("AR", "C1425"),
];

/// Input every country rejects.
pub const INVALID_POSTAL_CODES: &[(&str, &str)] = &[
    ("GB", "1A1 1AA"),
    ("GB", "EC1A 1BBB"),
    ("CA", "K1A 0B"),
    ("MT", "PLA123"),
    ("NL", "AB12"),
    ("PT", "26600230"),
    ("BB", "BB1234"),
    ("DE", "101155"),
    ("FR", "DE75001"),
    ("US", "2050A"),
    ("IE", "D02/X285"),
    ("IE", ""),
];
