//! Static lookup tables mapping numeric values to labels.
//!
//! Field meanings are resolved through the [`RangeLookup`] trait so that each
//! table can be tested on its own:
//!
//! - [`RangeTable`] holds sorted, non-overlapping inclusive ranges and is
//!   searched by binary search. [`GS1_PREFIXES`] is the GS1 prefix table used
//!   for EAN-13 country codes.
//! - [`DigitTable`] maps a single digit `0`-`9` to a label. [`UPC_NUMBER_SYSTEMS`]
//!   and [`GTIN14_INDICATORS`] are digit tables.

/// Classify a numeric value to a label.
pub trait RangeLookup {
    /// Label for `value`, or `None` if the value is not covered.
    fn lookup(&self, value: u32) -> Option<&'static str>;

    /// Parse a digit string and look it up.
    fn lookup_str(&self, digits: &str) -> Option<&'static str> {
        digits.parse::<u32>().ok().and_then(|v| self.lookup(v))
    }
}

/// One inclusive range of a [`RangeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry {
    /// First value covered
    pub start: u32,
    /// Last value covered
    pub end: u32,
    /// Label for every value in `start..=end`
    pub label: &'static str,
}

impl RangeEntry {
    /// Create a range entry.
    #[must_use]
    pub const fn new(start: u32, end: u32, label: &'static str) -> Self {
        RangeEntry { start, end, label }
    }

    /// Whether `value` falls inside this range.
    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Sorted table of non-overlapping inclusive ranges.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    entries: &'static [RangeEntry],
}

impl RangeTable {
    /// Wrap a static slice of entries.
    ///
    /// Entries must be sorted by `start` and must not overlap; see
    /// [`RangeTable::is_well_formed`].
    #[must_use]
    pub const fn new(entries: &'static [RangeEntry]) -> Self {
        RangeTable { entries }
    }

    /// The underlying entries in ascending order.
    #[must_use]
    pub const fn entries(&self) -> &'static [RangeEntry] {
        self.entries
    }

    /// Check that every entry has `start <= end` and starts after the
    /// previous entry ends.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.entries.iter().all(|e| e.start <= e.end)
            && self.entries.windows(2).all(|w| w[0].end < w[1].start)
    }
}

impl RangeLookup for RangeTable {
    fn lookup(&self, value: u32) -> Option<&'static str> {
        let idx = self.entries.partition_point(|e| e.end < value);
        self.entries
            .get(idx)
            .filter(|e| e.contains(value))
            .map(|e| e.label)
    }
}

/// Ten labels indexed by a single decimal digit.
#[derive(Debug, Clone, Copy)]
pub struct DigitTable {
    labels: [&'static str; 10],
}

impl DigitTable {
    /// Create a digit table.
    #[must_use]
    pub const fn new(labels: [&'static str; 10]) -> Self {
        DigitTable { labels }
    }
}

impl RangeLookup for DigitTable {
    fn lookup(&self, value: u32) -> Option<&'static str> {
        usize::try_from(value)
            .ok()
            .and_then(|i| self.labels.get(i))
            .copied()
    }
}

/// Meaning of the UPC-A number system digit (first digit).
pub const UPC_NUMBER_SYSTEMS: DigitTable = DigitTable::new([
    "Regular UPC code",
    "Reserved",
    "Random-weight item",
    "Pharmaceutical (National Drug Code)",
    "In-store use",
    "Coupon",
    "Regular UPC code",
    "Regular UPC code",
    "Reserved",
    "Reserved",
]);

/// Packaging level named by the GTIN-14 indicator digit (first digit).
pub const GTIN14_INDICATORS: DigitTable = DigitTable::new([
    "Standard trade item",
    "Packaging level 1",
    "Packaging level 2",
    "Packaging level 3",
    "Packaging level 4",
    "Packaging level 5",
    "Packaging level 6",
    "Packaging level 7",
    "Packaging level 8",
    "Variable measure trade item",
]);

const GS1_PREFIX_ENTRIES: &[RangeEntry] = &[
    RangeEntry::new(0, 19, "United States and Canada"),
    RangeEntry::new(20, 29, "Restricted distribution"),
    RangeEntry::new(30, 39, "United States (drugs)"),
    RangeEntry::new(40, 49, "Restricted distribution"),
    RangeEntry::new(50, 59, "Coupons"),
    RangeEntry::new(60, 99, "United States and Canada"),
    RangeEntry::new(100, 139, "United States"),
    RangeEntry::new(200, 299, "Restricted distribution"),
    RangeEntry::new(300, 379, "France and Monaco"),
    RangeEntry::new(380, 380, "Bulgaria"),
    RangeEntry::new(383, 383, "Slovenia"),
    RangeEntry::new(385, 385, "Croatia"),
    RangeEntry::new(387, 387, "Bosnia and Herzegovina"),
    RangeEntry::new(389, 389, "Montenegro"),
    RangeEntry::new(390, 390, "Kosovo"),
    RangeEntry::new(400, 440, "Germany"),
    RangeEntry::new(450, 459, "Japan"),
    RangeEntry::new(460, 469, "Russia"),
    RangeEntry::new(470, 470, "Kyrgyzstan"),
    RangeEntry::new(471, 471, "Taiwan"),
    RangeEntry::new(474, 474, "Estonia"),
    RangeEntry::new(475, 475, "Latvia"),
    RangeEntry::new(476, 476, "Azerbaijan"),
    RangeEntry::new(477, 477, "Lithuania"),
    RangeEntry::new(478, 478, "Uzbekistan"),
    RangeEntry::new(479, 479, "Sri Lanka"),
    RangeEntry::new(480, 480, "Philippines"),
    RangeEntry::new(481, 481, "Belarus"),
    RangeEntry::new(482, 482, "Ukraine"),
    RangeEntry::new(483, 483, "Turkmenistan"),
    RangeEntry::new(484, 484, "Moldova"),
    RangeEntry::new(485, 485, "Armenia"),
    RangeEntry::new(486, 486, "Georgia"),
    RangeEntry::new(487, 487, "Kazakhstan"),
    RangeEntry::new(488, 488, "Tajikistan"),
    RangeEntry::new(489, 489, "Hong Kong"),
    RangeEntry::new(490, 499, "Japan"),
    RangeEntry::new(500, 509, "United Kingdom"),
    RangeEntry::new(520, 521, "Greece"),
    RangeEntry::new(528, 528, "Lebanon"),
    RangeEntry::new(529, 529, "Cyprus"),
    RangeEntry::new(530, 530, "Albania"),
    RangeEntry::new(531, 531, "North Macedonia"),
    RangeEntry::new(535, 535, "Malta"),
    RangeEntry::new(539, 539, "Ireland"),
    RangeEntry::new(540, 549, "Belgium and Luxembourg"),
    RangeEntry::new(560, 560, "Portugal"),
    RangeEntry::new(569, 569, "Iceland"),
    RangeEntry::new(570, 579, "Denmark, Faroe Islands and Greenland"),
    RangeEntry::new(590, 590, "Poland"),
    RangeEntry::new(594, 594, "Romania"),
    RangeEntry::new(599, 599, "Hungary"),
    RangeEntry::new(600, 601, "South Africa"),
    RangeEntry::new(603, 603, "Ghana"),
    RangeEntry::new(604, 604, "Senegal"),
    RangeEntry::new(605, 605, "Uganda"),
    RangeEntry::new(606, 606, "Angola"),
    RangeEntry::new(607, 607, "Oman"),
    RangeEntry::new(608, 608, "Bahrain"),
    RangeEntry::new(609, 609, "Mauritius"),
    RangeEntry::new(611, 611, "Morocco"),
    RangeEntry::new(613, 613, "Algeria"),
    RangeEntry::new(615, 615, "Nigeria"),
    RangeEntry::new(616, 616, "Kenya"),
    RangeEntry::new(617, 617, "Cameroon"),
    RangeEntry::new(618, 618, "Ivory Coast"),
    RangeEntry::new(619, 619, "Tunisia"),
    RangeEntry::new(620, 620, "Tanzania"),
    RangeEntry::new(621, 621, "Syria"),
    RangeEntry::new(622, 622, "Egypt"),
    RangeEntry::new(623, 623, "Brunei"),
    RangeEntry::new(624, 624, "Libya"),
    RangeEntry::new(625, 625, "Jordan"),
    RangeEntry::new(626, 626, "Iran"),
    RangeEntry::new(627, 627, "Kuwait"),
    RangeEntry::new(628, 628, "Saudi Arabia"),
    RangeEntry::new(629, 629, "United Arab Emirates"),
    RangeEntry::new(630, 630, "Qatar"),
    RangeEntry::new(631, 631, "Namibia"),
    RangeEntry::new(640, 649, "Finland"),
    RangeEntry::new(680, 681, "China"),
    RangeEntry::new(690, 699, "China"),
    RangeEntry::new(700, 709, "Norway"),
    RangeEntry::new(729, 729, "Israel"),
    RangeEntry::new(730, 739, "Sweden"),
    RangeEntry::new(740, 740, "Guatemala"),
    RangeEntry::new(741, 741, "El Salvador"),
    RangeEntry::new(742, 742, "Honduras"),
    RangeEntry::new(743, 743, "Nicaragua"),
    RangeEntry::new(744, 744, "Costa Rica"),
    RangeEntry::new(745, 745, "Panama"),
    RangeEntry::new(746, 746, "Dominican Republic"),
    RangeEntry::new(750, 750, "Mexico"),
    RangeEntry::new(754, 755, "Canada"),
    RangeEntry::new(759, 759, "Venezuela"),
    RangeEntry::new(760, 769, "Switzerland and Liechtenstein"),
    RangeEntry::new(770, 771, "Colombia"),
    RangeEntry::new(773, 773, "Uruguay"),
    RangeEntry::new(775, 775, "Peru"),
    RangeEntry::new(777, 777, "Bolivia"),
    RangeEntry::new(778, 779, "Argentina"),
    RangeEntry::new(780, 780, "Chile"),
    RangeEntry::new(784, 784, "Paraguay"),
    RangeEntry::new(786, 786, "Ecuador"),
    RangeEntry::new(789, 790, "Brazil"),
    RangeEntry::new(800, 839, "Italy, San Marino and Vatican City"),
    RangeEntry::new(840, 849, "Spain and Andorra"),
    RangeEntry::new(850, 850, "Cuba"),
    RangeEntry::new(858, 858, "Slovakia"),
    RangeEntry::new(859, 859, "Czech Republic"),
    RangeEntry::new(860, 860, "Serbia"),
    RangeEntry::new(865, 865, "Mongolia"),
    RangeEntry::new(867, 867, "North Korea"),
    RangeEntry::new(868, 869, "Turkey"),
    RangeEntry::new(870, 879, "Netherlands"),
    RangeEntry::new(880, 880, "South Korea"),
    RangeEntry::new(883, 883, "Myanmar"),
    RangeEntry::new(884, 884, "Cambodia"),
    RangeEntry::new(885, 885, "Thailand"),
    RangeEntry::new(888, 888, "Singapore"),
    RangeEntry::new(890, 890, "India"),
    RangeEntry::new(893, 893, "Vietnam"),
    RangeEntry::new(896, 896, "Pakistan"),
    RangeEntry::new(899, 899, "Indonesia"),
    RangeEntry::new(900, 919, "Austria"),
    RangeEntry::new(930, 939, "Australia"),
    RangeEntry::new(940, 949, "New Zealand"),
    RangeEntry::new(950, 951, "GS1 Global Office"),
    RangeEntry::new(955, 955, "Malaysia"),
    RangeEntry::new(958, 958, "Macau"),
    RangeEntry::new(960, 969, "GS1 Global Office (GTIN-8)"),
    RangeEntry::new(977, 977, "Serial publications (ISSN)"),
    RangeEntry::new(978, 979, "Bookland (ISBN)"),
    RangeEntry::new(980, 980, "Refund receipts"),
    RangeEntry::new(981, 984, "Common currency coupons"),
    RangeEntry::new(990, 999, "Coupons"),
];

/// GS1 prefix ranges (first three digits of an EAN-13) to the issuing
/// country, region, or reserved use.
pub const GS1_PREFIXES: RangeTable = RangeTable::new(GS1_PREFIX_ENTRIES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gs1_table_well_formed() {
        assert!(GS1_PREFIXES.is_well_formed());
    }

    #[test]
    fn test_gs1_range_bounds() {
        assert_eq!(GS1_PREFIXES.lookup(400), Some("Germany"));
        assert_eq!(GS1_PREFIXES.lookup(440), Some("Germany"));
        assert_eq!(GS1_PREFIXES.lookup(441), None);
        assert_eq!(GS1_PREFIXES.lookup(0), Some("United States and Canada"));
        assert_eq!(GS1_PREFIXES.lookup(999), Some("Coupons"));
        assert_eq!(GS1_PREFIXES.lookup(1000), None);
    }

    #[test]
    fn test_gs1_single_value_ranges() {
        assert_eq!(GS1_PREFIXES.lookup(489), Some("Hong Kong"));
        assert_eq!(GS1_PREFIXES.lookup(729), Some("Israel"));
        assert_eq!(GS1_PREFIXES.lookup(978), Some("Bookland (ISBN)"));
    }

    #[test]
    fn test_gs1_smaller_member_organisations() {
        assert_eq!(GS1_PREFIXES.lookup(607), Some("Oman"));
        assert_eq!(GS1_PREFIXES.lookup(623), Some("Brunei"));
        assert_eq!(GS1_PREFIXES.lookup(630), Some("Qatar"));
        assert_eq!(GS1_PREFIXES.lookup(631), Some("Namibia"));
        assert_eq!(GS1_PREFIXES.lookup(681), Some("China"));
        assert_eq!(GS1_PREFIXES.lookup(883), Some("Myanmar"));
    }

    #[test]
    fn test_gs1_gap_is_none() {
        assert_eq!(GS1_PREFIXES.lookup(140), None);
        assert_eq!(GS1_PREFIXES.lookup(381), None);
    }

    #[test]
    fn test_lookup_str() {
        assert_eq!(GS1_PREFIXES.lookup_str("500"), Some("United Kingdom"));
        assert_eq!(GS1_PREFIXES.lookup_str("019"), Some("United States and Canada"));
        assert_eq!(GS1_PREFIXES.lookup_str("x"), None);
    }

    #[test]
    fn test_malformed_table_detected() {
        static OVERLAPPING: &[RangeEntry] =
            &[RangeEntry::new(0, 10, "a"), RangeEntry::new(10, 20, "b")];
        static INVERTED: &[RangeEntry] = &[RangeEntry::new(5, 1, "a")];
        assert!(!RangeTable::new(OVERLAPPING).is_well_formed());
        assert!(!RangeTable::new(INVERTED).is_well_formed());
    }

    #[test]
    fn test_digit_tables() {
        assert_eq!(UPC_NUMBER_SYSTEMS.lookup(0), Some("Regular UPC code"));
        assert_eq!(UPC_NUMBER_SYSTEMS.lookup(2), Some("Random-weight item"));
        assert_eq!(UPC_NUMBER_SYSTEMS.lookup(5), Some("Coupon"));
        assert_eq!(GTIN14_INDICATORS.lookup(0), Some("Standard trade item"));
        assert_eq!(GTIN14_INDICATORS.lookup(9), Some("Variable measure trade item"));
        assert_eq!(GTIN14_INDICATORS.lookup(10), None);
    }
}
