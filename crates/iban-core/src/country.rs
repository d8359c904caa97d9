//! # Country Codes — ISO 3166-1 Table
//!
//! Static table of country codes consumed by the IBAN and BIC facades.
//! The table is sorted by alpha-2 code and never mutated; entries live for
//! the whole process.

use serde::Serialize;

/// One ISO 3166-1 country entry with its ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode {
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: Option<u16>,
    name: &'static str,
    currency: Option<&'static str>,
}

impl CountryCode {
    const fn new(
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: Option<u16>,
        name: &'static str,
        currency: Option<&'static str>,
    ) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
            name,
            currency,
        }
    }

    /// Two-letter code, e.g. `"TR"`.
    pub fn alpha2(&self) -> &'static str {
        self.alpha2
    }

    /// Three-letter code, e.g. `"TUR"`.
    pub fn alpha3(&self) -> &'static str {
        self.alpha3
    }

    /// ISO numeric code. `None` for user-assigned codes such as Kosovo.
    pub fn numeric(&self) -> Option<u16> {
        self.numeric
    }

    /// English short name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// ISO 4217 currency code, if the territory has one.
    pub fn currency(&self) -> Option<&'static str> {
        self.currency
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alpha2)
    }
}

/// Find a country by its alpha-2 code. Matching is exact and case-sensitive.
pub fn lookup(alpha2: &str) -> Option<&'static CountryCode> {
    COUNTRIES
        .binary_search_by(|c| c.alpha2.cmp(alpha2))
        .ok()
        .map(|i| &COUNTRIES[i])
}

/// Every known country, sorted by alpha-2 code.
pub fn all() -> &'static [CountryCode] {
    COUNTRIES
}

// Sorted by alpha-2; `lookup` relies on it.
static COUNTRIES: &[CountryCode] = &[
    CountryCode::new("AD", "AND", Some(20), "Andorra", Some("EUR")),
    CountryCode::new("AE", "ARE", Some(784), "United Arab Emirates", Some("AED")),
    CountryCode::new("AF", "AFG", Some(4), "Afghanistan", Some("AFN")),
    CountryCode::new("AG", "ATG", Some(28), "Antigua and Barbuda", Some("XCD")),
    CountryCode::new("AI", "AIA", Some(660), "Anguilla", Some("XCD")),
    CountryCode::new("AL", "ALB", Some(8), "Albania", Some("ALL")),
    CountryCode::new("AM", "ARM", Some(51), "Armenia", Some("AMD")),
    CountryCode::new("AO", "AGO", Some(24), "Angola", Some("AOA")),
    CountryCode::new("AQ", "ATA", Some(10), "Antarctica", None),
    CountryCode::new("AR", "ARG", Some(32), "Argentina", Some("ARS")),
    CountryCode::new("AS", "ASM", Some(16), "American Samoa", Some("USD")),
    CountryCode::new("AT", "AUT", Some(40), "Austria", Some("EUR")),
    CountryCode::new("AU", "AUS", Some(36), "Australia", Some("AUD")),
    CountryCode::new("AW", "ABW", Some(533), "Aruba", Some("AWG")),
    CountryCode::new("AX", "ALA", Some(248), "Åland Islands", Some("EUR")),
    CountryCode::new("AZ", "AZE", Some(31), "Azerbaijan", Some("AZN")),
    CountryCode::new("BA", "BIH", Some(70), "Bosnia and Herzegovina", Some("BAM")),
    CountryCode::new("BB", "BRB", Some(52), "Barbados", Some("BBD")),
    CountryCode::new("BD", "BGD", Some(50), "Bangladesh", Some("BDT")),
    CountryCode::new("BE", "BEL", Some(56), "Belgium", Some("EUR")),
    CountryCode::new("BF", "BFA", Some(854), "Burkina Faso", Some("XOF")),
    CountryCode::new("BG", "BGR", Some(100), "Bulgaria", Some("BGN")),
    CountryCode::new("BH", "BHR", Some(48), "Bahrain", Some("BHD")),
    CountryCode::new("BI", "BDI", Some(108), "Burundi", Some("BIF")),
    CountryCode::new("BJ", "BEN", Some(204), "Benin", Some("XOF")),
    CountryCode::new("BL", "BLM", Some(652), "Saint Barthélemy", Some("EUR")),
    CountryCode::new("BM", "BMU", Some(60), "Bermuda", Some("BMD")),
    CountryCode::new("BN", "BRN", Some(96), "Brunei Darussalam", Some("BND")),
    CountryCode::new("BO", "BOL", Some(68), "Bolivia", Some("BOB")),
    CountryCode::new(
        "BQ",
        "BES",
        Some(535),
        "Bonaire, Sint Eustatius and Saba",
        Some("USD"),
    ),
    CountryCode::new("BR", "BRA", Some(76), "Brazil", Some("BRL")),
    CountryCode::new("BS", "BHS", Some(44), "Bahamas", Some("BSD")),
    CountryCode::new("BT", "BTN", Some(64), "Bhutan", Some("BTN")),
    CountryCode::new("BV", "BVT", Some(74), "Bouvet Island", Some("NOK")),
    CountryCode::new("BW", "BWA", Some(72), "Botswana", Some("BWP")),
    CountryCode::new("BY", "BLR", Some(112), "Belarus", Some("BYN")),
    CountryCode::new("BZ", "BLZ", Some(84), "Belize", Some("BZD")),
    CountryCode::new("CA", "CAN", Some(124), "Canada", Some("CAD")),
    CountryCode::new(
        "CC",
        "CCK",
        Some(166),
        "Cocos (Keeling) Islands",
        Some("AUD"),
    ),
    CountryCode::new(
        "CD",
        "COD",
        Some(180),
        "Congo, Democratic Republic of the",
        Some("CDF"),
    ),
    CountryCode::new(
        "CF",
        "CAF",
        Some(140),
        "Central African Republic",
        Some("XAF"),
    ),
    CountryCode::new("CG", "COG", Some(178), "Congo", Some("XAF")),
    CountryCode::new("CH", "CHE", Some(756), "Switzerland", Some("CHF")),
    CountryCode::new("CI", "CIV", Some(384), "Côte d'Ivoire", Some("XOF")),
    CountryCode::new("CK", "COK", Some(184), "Cook Islands", Some("NZD")),
    CountryCode::new("CL", "CHL", Some(152), "Chile", Some("CLP")),
    CountryCode::new("CM", "CMR", Some(120), "Cameroon", Some("XAF")),
    CountryCode::new("CN", "CHN", Some(156), "China", Some("CNY")),
    CountryCode::new("CO", "COL", Some(170), "Colombia", Some("COP")),
    CountryCode::new("CR", "CRI", Some(188), "Costa Rica", Some("CRC")),
    CountryCode::new("CU", "CUB", Some(192), "Cuba", Some("CUP")),
    CountryCode::new("CV", "CPV", Some(132), "Cabo Verde", Some("CVE")),
    CountryCode::new("CW", "CUW", Some(531), "Curaçao", Some("ANG")),
    CountryCode::new("CX", "CXR", Some(162), "Christmas Island", Some("AUD")),
    CountryCode::new("CY", "CYP", Some(196), "Cyprus", Some("EUR")),
    CountryCode::new("CZ", "CZE", Some(203), "Czechia", Some("CZK")),
    CountryCode::new("DE", "DEU", Some(276), "Germany", Some("EUR")),
    CountryCode::new("DJ", "DJI", Some(262), "Djibouti", Some("DJF")),
    CountryCode::new("DK", "DNK", Some(208), "Denmark", Some("DKK")),
    CountryCode::new("DM", "DMA", Some(212), "Dominica", Some("XCD")),
    CountryCode::new("DO", "DOM", Some(214), "Dominican Republic", Some("DOP")),
    CountryCode::new("DZ", "DZA", Some(12), "Algeria", Some("DZD")),
    CountryCode::new("EC", "ECU", Some(218), "Ecuador", Some("USD")),
    CountryCode::new("EE", "EST", Some(233), "Estonia", Some("EUR")),
    CountryCode::new("EG", "EGY", Some(818), "Egypt", Some("EGP")),
    CountryCode::new("EH", "ESH", Some(732), "Western Sahara", Some("MAD")),
    CountryCode::new("ER", "ERI", Some(232), "Eritrea", Some("ERN")),
    CountryCode::new("ES", "ESP", Some(724), "Spain", Some("EUR")),
    CountryCode::new("ET", "ETH", Some(231), "Ethiopia", Some("ETB")),
    CountryCode::new("FI", "FIN", Some(246), "Finland", Some("EUR")),
    CountryCode::new("FJ", "FJI", Some(242), "Fiji", Some("FJD")),
    CountryCode::new(
        "FK",
        "FLK",
        Some(238),
        "Falkland Islands (Malvinas)",
        Some("FKP"),
    ),
    CountryCode::new("FM", "FSM", Some(583), "Micronesia", Some("USD")),
    CountryCode::new("FO", "FRO", Some(234), "Faroe Islands", Some("DKK")),
    CountryCode::new("FR", "FRA", Some(250), "France", Some("EUR")),
    CountryCode::new("GA", "GAB", Some(266), "Gabon", Some("XAF")),
    CountryCode::new("GB", "GBR", Some(826), "United Kingdom", Some("GBP")),
    CountryCode::new("GD", "GRD", Some(308), "Grenada", Some("XCD")),
    CountryCode::new("GE", "GEO", Some(268), "Georgia", Some("GEL")),
    CountryCode::new("GF", "GUF", Some(254), "French Guiana", Some("EUR")),
    CountryCode::new("GG", "GGY", Some(831), "Guernsey", Some("GBP")),
    CountryCode::new("GH", "GHA", Some(288), "Ghana", Some("GHS")),
    CountryCode::new("GI", "GIB", Some(292), "Gibraltar", Some("GIP")),
    CountryCode::new("GL", "GRL", Some(304), "Greenland", Some("DKK")),
    CountryCode::new("GM", "GMB", Some(270), "Gambia", Some("GMD")),
    CountryCode::new("GN", "GIN", Some(324), "Guinea", Some("GNF")),
    CountryCode::new("GP", "GLP", Some(312), "Guadeloupe", Some("EUR")),
    CountryCode::new("GQ", "GNQ", Some(226), "Equatorial Guinea", Some("XAF")),
    CountryCode::new("GR", "GRC", Some(300), "Greece", Some("EUR")),
    CountryCode::new(
        "GS",
        "SGS",
        Some(239),
        "South Georgia and the South Sandwich Islands",
        Some("GBP"),
    ),
    CountryCode::new("GT", "GTM", Some(320), "Guatemala", Some("GTQ")),
    CountryCode::new("GU", "GUM", Some(316), "Guam", Some("USD")),
    CountryCode::new("GW", "GNB", Some(624), "Guinea-Bissau", Some("XOF")),
    CountryCode::new("GY", "GUY", Some(328), "Guyana", Some("GYD")),
    CountryCode::new("HK", "HKG", Some(344), "Hong Kong", Some("HKD")),
    CountryCode::new(
        "HM",
        "HMD",
        Some(334),
        "Heard Island and McDonald Islands",
        Some("AUD"),
    ),
    CountryCode::new("HN", "HND", Some(340), "Honduras", Some("HNL")),
    CountryCode::new("HR", "HRV", Some(191), "Croatia", Some("EUR")),
    CountryCode::new("HT", "HTI", Some(332), "Haiti", Some("HTG")),
    CountryCode::new("HU", "HUN", Some(348), "Hungary", Some("HUF")),
    CountryCode::new("ID", "IDN", Some(360), "Indonesia", Some("IDR")),
    CountryCode::new("IE", "IRL", Some(372), "Ireland", Some("EUR")),
    CountryCode::new("IL", "ISR", Some(376), "Israel", Some("ILS")),
    CountryCode::new("IM", "IMN", Some(833), "Isle of Man", Some("GBP")),
    CountryCode::new("IN", "IND", Some(356), "India", Some("INR")),
    CountryCode::new(
        "IO",
        "IOT",
        Some(86),
        "British Indian Ocean Territory",
        Some("USD"),
    ),
    CountryCode::new("IQ", "IRQ", Some(368), "Iraq", Some("IQD")),
    CountryCode::new("IR", "IRN", Some(364), "Iran", Some("IRR")),
    CountryCode::new("IS", "ISL", Some(352), "Iceland", Some("ISK")),
    CountryCode::new("IT", "ITA", Some(380), "Italy", Some("EUR")),
    CountryCode::new("JE", "JEY", Some(832), "Jersey", Some("GBP")),
    CountryCode::new("JM", "JAM", Some(388), "Jamaica", Some("JMD")),
    CountryCode::new("JO", "JOR", Some(400), "Jordan", Some("JOD")),
    CountryCode::new("JP", "JPN", Some(392), "Japan", Some("JPY")),
    CountryCode::new("KE", "KEN", Some(404), "Kenya", Some("KES")),
    CountryCode::new("KG", "KGZ", Some(417), "Kyrgyzstan", Some("KGS")),
    CountryCode::new("KH", "KHM", Some(116), "Cambodia", Some("KHR")),
    CountryCode::new("KI", "KIR", Some(296), "Kiribati", Some("AUD")),
    CountryCode::new("KM", "COM", Some(174), "Comoros", Some("KMF")),
    CountryCode::new("KN", "KNA", Some(659), "Saint Kitts and Nevis", Some("XCD")),
    CountryCode::new(
        "KP",
        "PRK",
        Some(408),
        "Korea, Democratic People's Republic of",
        Some("KPW"),
    ),
    CountryCode::new("KR", "KOR", Some(410), "Korea, Republic of", Some("KRW")),
    CountryCode::new("KW", "KWT", Some(414), "Kuwait", Some("KWD")),
    CountryCode::new("KY", "CYM", Some(136), "Cayman Islands", Some("KYD")),
    CountryCode::new("KZ", "KAZ", Some(398), "Kazakhstan", Some("KZT")),
    CountryCode::new(
        "LA",
        "LAO",
        Some(418),
        "Lao People's Democratic Republic",
        Some("LAK"),
    ),
    CountryCode::new("LB", "LBN", Some(422), "Lebanon", Some("LBP")),
    CountryCode::new("LC", "LCA", Some(662), "Saint Lucia", Some("XCD")),
    CountryCode::new("LI", "LIE", Some(438), "Liechtenstein", Some("CHF")),
    CountryCode::new("LK", "LKA", Some(144), "Sri Lanka", Some("LKR")),
    CountryCode::new("LR", "LBR", Some(430), "Liberia", Some("LRD")),
    CountryCode::new("LS", "LSO", Some(426), "Lesotho", Some("LSL")),
    CountryCode::new("LT", "LTU", Some(440), "Lithuania", Some("EUR")),
    CountryCode::new("LU", "LUX", Some(442), "Luxembourg", Some("EUR")),
    CountryCode::new("LV", "LVA", Some(428), "Latvia", Some("EUR")),
    CountryCode::new("LY", "LBY", Some(434), "Libya", Some("LYD")),
    CountryCode::new("MA", "MAR", Some(504), "Morocco", Some("MAD")),
    CountryCode::new("MC", "MCO", Some(492), "Monaco", Some("EUR")),
    CountryCode::new("MD", "MDA", Some(498), "Moldova", Some("MDL")),
    CountryCode::new("ME", "MNE", Some(499), "Montenegro", Some("EUR")),
    CountryCode::new(
        "MF",
        "MAF",
        Some(663),
        "Saint Martin (French part)",
        Some("EUR"),
    ),
    CountryCode::new("MG", "MDG", Some(450), "Madagascar", Some("MGA")),
    CountryCode::new("MH", "MHL", Some(584), "Marshall Islands", Some("USD")),
    CountryCode::new("MK", "MKD", Some(807), "North Macedonia", Some("MKD")),
    CountryCode::new("ML", "MLI", Some(466), "Mali", Some("XOF")),
    CountryCode::new("MM", "MMR", Some(104), "Myanmar", Some("MMK")),
    CountryCode::new("MN", "MNG", Some(496), "Mongolia", Some("MNT")),
    CountryCode::new("MO", "MAC", Some(446), "Macao", Some("MOP")),
    CountryCode::new(
        "MP",
        "MNP",
        Some(580),
        "Northern Mariana Islands",
        Some("USD"),
    ),
    CountryCode::new("MQ", "MTQ", Some(474), "Martinique", Some("EUR")),
    CountryCode::new("MR", "MRT", Some(478), "Mauritania", Some("MRU")),
    CountryCode::new("MS", "MSR", Some(500), "Montserrat", Some("XCD")),
    CountryCode::new("MT", "MLT", Some(470), "Malta", Some("EUR")),
    CountryCode::new("MU", "MUS", Some(480), "Mauritius", Some("MUR")),
    CountryCode::new("MV", "MDV", Some(462), "Maldives", Some("MVR")),
    CountryCode::new("MW", "MWI", Some(454), "Malawi", Some("MWK")),
    CountryCode::new("MX", "MEX", Some(484), "Mexico", Some("MXN")),
    CountryCode::new("MY", "MYS", Some(458), "Malaysia", Some("MYR")),
    CountryCode::new("MZ", "MOZ", Some(508), "Mozambique", Some("MZN")),
    CountryCode::new("NA", "NAM", Some(516), "Namibia", Some("NAD")),
    CountryCode::new("NC", "NCL", Some(540), "New Caledonia", Some("XPF")),
    CountryCode::new("NE", "NER", Some(562), "Niger", Some("XOF")),
    CountryCode::new("NF", "NFK", Some(574), "Norfolk Island", Some("AUD")),
    CountryCode::new("NG", "NGA", Some(566), "Nigeria", Some("NGN")),
    CountryCode::new("NI", "NIC", Some(558), "Nicaragua", Some("NIO")),
    CountryCode::new("NL", "NLD", Some(528), "Netherlands", Some("EUR")),
    CountryCode::new("NO", "NOR", Some(578), "Norway", Some("NOK")),
    CountryCode::new("NP", "NPL", Some(524), "Nepal", Some("NPR")),
    CountryCode::new("NR", "NRU", Some(520), "Nauru", Some("AUD")),
    CountryCode::new("NU", "NIU", Some(570), "Niue", Some("NZD")),
    CountryCode::new("NZ", "NZL", Some(554), "New Zealand", Some("NZD")),
    CountryCode::new("OM", "OMN", Some(512), "Oman", Some("OMR")),
    CountryCode::new("PA", "PAN", Some(591), "Panama", Some("PAB")),
    CountryCode::new("PE", "PER", Some(604), "Peru", Some("PEN")),
    CountryCode::new("PF", "PYF", Some(258), "French Polynesia", Some("XPF")),
    CountryCode::new("PG", "PNG", Some(598), "Papua New Guinea", Some("PGK")),
    CountryCode::new("PH", "PHL", Some(608), "Philippines", Some("PHP")),
    CountryCode::new("PK", "PAK", Some(586), "Pakistan", Some("PKR")),
    CountryCode::new("PL", "POL", Some(616), "Poland", Some("PLN")),
    CountryCode::new(
        "PM",
        "SPM",
        Some(666),
        "Saint Pierre and Miquelon",
        Some("EUR"),
    ),
    CountryCode::new("PN", "PCN", Some(612), "Pitcairn", Some("NZD")),
    CountryCode::new("PR", "PRI", Some(630), "Puerto Rico", Some("USD")),
    CountryCode::new("PS", "PSE", Some(275), "Palestine, State of", Some("ILS")),
    CountryCode::new("PT", "PRT", Some(620), "Portugal", Some("EUR")),
    CountryCode::new("PW", "PLW", Some(585), "Palau", Some("USD")),
    CountryCode::new("PY", "PRY", Some(600), "Paraguay", Some("PYG")),
    CountryCode::new("QA", "QAT", Some(634), "Qatar", Some("QAR")),
    CountryCode::new("RE", "REU", Some(638), "Réunion", Some("EUR")),
    CountryCode::new("RO", "ROU", Some(642), "Romania", Some("RON")),
    CountryCode::new("RS", "SRB", Some(688), "Serbia", Some("RSD")),
    CountryCode::new("RU", "RUS", Some(643), "Russian Federation", Some("RUB")),
    CountryCode::new("RW", "RWA", Some(646), "Rwanda", Some("RWF")),
    CountryCode::new("SA", "SAU", Some(682), "Saudi Arabia", Some("SAR")),
    CountryCode::new("SB", "SLB", Some(90), "Solomon Islands", Some("SBD")),
    CountryCode::new("SC", "SYC", Some(690), "Seychelles", Some("SCR")),
    CountryCode::new("SD", "SDN", Some(729), "Sudan", Some("SDG")),
    CountryCode::new("SE", "SWE", Some(752), "Sweden", Some("SEK")),
    CountryCode::new("SG", "SGP", Some(702), "Singapore", Some("SGD")),
    CountryCode::new(
        "SH",
        "SHN",
        Some(654),
        "Saint Helena, Ascension and Tristan da Cunha",
        Some("SHP"),
    ),
    CountryCode::new("SI", "SVN", Some(705), "Slovenia", Some("EUR")),
    CountryCode::new(
        "SJ",
        "SJM",
        Some(744),
        "Svalbard and Jan Mayen",
        Some("NOK"),
    ),
    CountryCode::new("SK", "SVK", Some(703), "Slovakia", Some("EUR")),
    CountryCode::new("SL", "SLE", Some(694), "Sierra Leone", Some("SLE")),
    CountryCode::new("SM", "SMR", Some(674), "San Marino", Some("EUR")),
    CountryCode::new("SN", "SEN", Some(686), "Senegal", Some("XOF")),
    CountryCode::new("SO", "SOM", Some(706), "Somalia", Some("SOS")),
    CountryCode::new("SR", "SUR", Some(740), "Suriname", Some("SRD")),
    CountryCode::new("SS", "SSD", Some(728), "South Sudan", Some("SSP")),
    CountryCode::new("ST", "STP", Some(678), "Sao Tome and Principe", Some("STN")),
    CountryCode::new("SV", "SLV", Some(222), "El Salvador", Some("USD")),
    CountryCode::new(
        "SX",
        "SXM",
        Some(534),
        "Sint Maarten (Dutch part)",
        Some("ANG"),
    ),
    CountryCode::new("SY", "SYR", Some(760), "Syrian Arab Republic", Some("SYP")),
    CountryCode::new("SZ", "SWZ", Some(748), "Eswatini", Some("SZL")),
    CountryCode::new(
        "TC",
        "TCA",
        Some(796),
        "Turks and Caicos Islands",
        Some("USD"),
    ),
    CountryCode::new("TD", "TCD", Some(148), "Chad", Some("XAF")),
    CountryCode::new(
        "TF",
        "ATF",
        Some(260),
        "French Southern Territories",
        Some("EUR"),
    ),
    CountryCode::new("TG", "TGO", Some(768), "Togo", Some("XOF")),
    CountryCode::new("TH", "THA", Some(764), "Thailand", Some("THB")),
    CountryCode::new("TJ", "TJK", Some(762), "Tajikistan", Some("TJS")),
    CountryCode::new("TK", "TKL", Some(772), "Tokelau", Some("NZD")),
    CountryCode::new("TL", "TLS", Some(626), "Timor-Leste", Some("USD")),
    CountryCode::new("TM", "TKM", Some(795), "Turkmenistan", Some("TMT")),
    CountryCode::new("TN", "TUN", Some(788), "Tunisia", Some("TND")),
    CountryCode::new("TO", "TON", Some(776), "Tonga", Some("TOP")),
    CountryCode::new("TR", "TUR", Some(792), "Türkiye", Some("TRY")),
    CountryCode::new("TT", "TTO", Some(780), "Trinidad and Tobago", Some("TTD")),
    CountryCode::new("TV", "TUV", Some(798), "Tuvalu", Some("AUD")),
    CountryCode::new("TW", "TWN", Some(158), "Taiwan", Some("TWD")),
    CountryCode::new("TZ", "TZA", Some(834), "Tanzania", Some("TZS")),
    CountryCode::new("UA", "UKR", Some(804), "Ukraine", Some("UAH")),
    CountryCode::new("UG", "UGA", Some(800), "Uganda", Some("UGX")),
    CountryCode::new(
        "UM",
        "UMI",
        Some(581),
        "United States Minor Outlying Islands",
        Some("USD"),
    ),
    CountryCode::new(
        "US",
        "USA",
        Some(840),
        "United States of America",
        Some("USD"),
    ),
    CountryCode::new("UY", "URY", Some(858), "Uruguay", Some("UYU")),
    CountryCode::new("UZ", "UZB", Some(860), "Uzbekistan", Some("UZS")),
    CountryCode::new("VA", "VAT", Some(336), "Holy See", Some("EUR")),
    CountryCode::new(
        "VC",
        "VCT",
        Some(670),
        "Saint Vincent and the Grenadines",
        Some("XCD"),
    ),
    CountryCode::new("VE", "VEN", Some(862), "Venezuela", Some("VES")),
    CountryCode::new(
        "VG",
        "VGB",
        Some(92),
        "Virgin Islands (British)",
        Some("USD"),
    ),
    CountryCode::new("VI", "VIR", Some(850), "Virgin Islands (U.S.)", Some("USD")),
    CountryCode::new("VN", "VNM", Some(704), "Viet Nam", Some("VND")),
    CountryCode::new("VU", "VUT", Some(548), "Vanuatu", Some("VUV")),
    CountryCode::new("WF", "WLF", Some(876), "Wallis and Futuna", Some("XPF")),
    CountryCode::new("WS", "WSM", Some(882), "Samoa", Some("WST")),
    CountryCode::new("XK", "XKX", None, "Kosovo", Some("EUR")),
    CountryCode::new("YE", "YEM", Some(887), "Yemen", Some("YER")),
    CountryCode::new("YT", "MYT", Some(175), "Mayotte", Some("EUR")),
    CountryCode::new("ZA", "ZAF", Some(710), "South Africa", Some("ZAR")),
    CountryCode::new("ZM", "ZMB", Some(894), "Zambia", Some("ZMW")),
    CountryCode::new("ZW", "ZWE", Some(716), "Zimbabwe", Some("ZWL")),
];
