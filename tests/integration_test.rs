//! Integration tests for geoip-csv-converter
//!
//! These tests run whole block CSVs through `convert` and `convert_file`.

use geoip_csv_converter::{convert, convert_file, ConvertError, Representations};

const BLOCKS: &str = "network,geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider
1.0.0.0/24,2077456,2077456,,0,0
4.69.140.16/29,6252001,6252001,,0,0
5.61.192.0/21,2635167,2635167,,0,0
2001:4220::/32,357994,357994,,0,0
2402:d000::/32,1227603,1227603,,0,0
2406:4000::/32,1835841,1835841,,0,0
";

const TRAILING: [&str; 7] = [
    "geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider",
    "2077456,2077456,,0,0",
    "6252001,6252001,,0,0",
    "2635167,2635167,,0,0",
    "357994,357994,,0,0",
    "1227603,1227603,,0,0",
    "1835841,1835841,,0,0",
];

fn flags(cidr: bool, range: bool, integer_range: bool, hex_range: bool) -> Representations {
    Representations {
        cidr,
        range,
        integer_range,
        hex_range,
    }
}

fn convert_str(input: &str, flags: Representations) -> String {
    let mut out = Vec::new();
    convert(input.as_bytes(), &mut out, flags).expect("conversion failed");
    String::from_utf8(out).unwrap()
}

fn check_output(name: &str, flags: Representations, expected: [&str; 7]) {
    let want: String = expected
        .iter()
        .zip(TRAILING)
        .map(|(leading, trailing)| format!("{leading},{trailing}\n"))
        .collect();
    assert_eq!(convert_str(BLOCKS, flags), want, "{name}");
}

#[test]
fn test_cidr_output() {
    check_output(
        "CIDR only",
        flags(true, false, false, false),
        [
            "network",
            "1.0.0.0/24",
            "4.69.140.16/29",
            "5.61.192.0/21",
            "2001:4220::/32",
            "2402:d000::/32",
            "2406:4000::/32",
        ],
    );
}

#[test]
fn test_range_output() {
    check_output(
        "range only",
        flags(false, true, false, false),
        [
            "network_start_ip,network_last_ip",
            "1.0.0.0,1.0.0.255",
            "4.69.140.16,4.69.140.23",
            "5.61.192.0,5.61.199.255",
            "2001:4220::,2001:4220:ffff:ffff:ffff:ffff:ffff:ffff",
            "2402:d000::,2402:d000:ffff:ffff:ffff:ffff:ffff:ffff",
            "2406:4000::,2406:4000:ffff:ffff:ffff:ffff:ffff:ffff",
        ],
    );
}

#[test]
fn test_integer_range_output() {
    check_output(
        "integer range only",
        flags(false, false, true, false),
        [
            "network_start_integer,network_last_integer",
            "16777216,16777471",
            "71666704,71666711",
            "87932928,87934975",
            "42541829336310884227257139937291534336,42541829415539046741521477530835484671",
            "47866811183171600627242296191018336256,47866811262399763141506633784562286591",
            "47884659703622814097215369772150030336,47884659782850976611479707365693980671",
        ],
    );
}

#[test]
fn test_hex_range_output() {
    check_output(
        "hex range only",
        flags(false, false, false, true),
        [
            "network_start_hex,network_last_hex",
            "1000000,10000ff",
            "4458c10,4458c17",
            "53dc000,53dc7ff",
            "20014220000000000000000000000000,20014220ffffffffffffffffffffffff",
            "2402d000000000000000000000000000,2402d000ffffffffffffffffffffffff",
            "24064000000000000000000000000000,24064000ffffffffffffffffffffffff",
        ],
    );
}

#[test]
fn test_all_output() {
    check_output(
        "all output options",
        flags(true, true, true, true),
        [
            "network,network_start_ip,network_last_ip,network_start_integer,network_last_integer,network_start_hex,network_last_hex",
            "1.0.0.0/24,1.0.0.0,1.0.0.255,16777216,16777471,1000000,10000ff",
            "4.69.140.16/29,4.69.140.16,4.69.140.23,71666704,71666711,4458c10,4458c17",
            "5.61.192.0/21,5.61.192.0,5.61.199.255,87932928,87934975,53dc000,53dc7ff",
            "2001:4220::/32,2001:4220::,2001:4220:ffff:ffff:ffff:ffff:ffff:ffff,42541829336310884227257139937291534336,42541829415539046741521477530835484671,20014220000000000000000000000000,20014220ffffffffffffffffffffffff",
            "2402:d000::/32,2402:d000::,2402:d000:ffff:ffff:ffff:ffff:ffff:ffff,47866811183171600627242296191018336256,47866811262399763141506633784562286591,2402d000000000000000000000000000,2402d000ffffffffffffffffffffffff",
            "2406:4000::/32,2406:4000::,2406:4000:ffff:ffff:ffff:ffff:ffff:ffff,47884659703622814097215369772150030336,47884659782850976611479707365693980671,24064000000000000000000000000000,24064000ffffffffffffffffffffffff",
        ],
    );
}

#[test]
fn test_integer_range_v6_scenario() {
    let out = convert_str(
        "network,city\n2001:db8:85a3:42::/64,X\n",
        flags(false, false, true, false),
    );
    assert_eq!(
        out,
        "network_start_integer,network_last_integer,city\n\
         42540766452641155289225172512357220352,42540766452641155307671916586066771967,X\n"
    );
}

#[test]
fn test_no_flags_strips_network() {
    let out = convert_str(BLOCKS, Representations::default());
    let want: String = TRAILING.iter().map(|t| format!("{t}\n")).collect();
    assert_eq!(out, want);
}

#[test]
fn test_column_counts_match_header() {
    let out = convert_str(BLOCKS, flags(true, false, true, true));
    let mut lines = out.lines();
    let columns = lines.next().unwrap().split(',').count();
    for line in lines {
        assert_eq!(line.split(',').count(), columns, "{line}");
    }
}

#[test]
fn test_reconverting_is_idempotent() {
    let all = flags(true, true, true, true);
    let first = convert_str(BLOCKS, all);
    let second = convert_str(&first, all);

    // the second pass keeps the first pass's generated columns as trailing data
    for (a, b) in first.lines().skip(1).zip(second.lines().skip(1)) {
        let derived_first: Vec<&str> = a.split(',').take(7).collect();
        let derived_second: Vec<&str> = b.split(',').take(7).collect();
        assert_eq!(derived_first, derived_second);
    }
}

#[test]
fn test_bad_network_fails_conversion() {
    let input = "network,city\n1.0.0.0/24,X\nnot-a-network,Y\n";
    let mut out = Vec::new();
    let err = convert(input.as_bytes(), &mut out, flags(true, false, false, false)).unwrap_err();
    match &err {
        ConvertError::ParseNetwork { network, .. } => assert_eq!(network, "not-a-network"),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("not-a-network"));
    assert_eq!(String::from_utf8(out).unwrap(), "network,city\n1.0.0.0/24,X\n");
}

#[test]
fn test_empty_input() {
    let mut out = Vec::new();
    let err = convert("".as_bytes(), &mut out, flags(true, false, false, false)).unwrap_err();
    assert!(matches!(err, ConvertError::MissingHeader));
}

#[test]
fn test_file_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    std::fs::write(&input, "network,something\n1.0.0.0/24,\"some more\"\n").unwrap();
    // stale content must be truncated
    std::fs::write(&output, "old content that is longer than the new output ....................................................................................................\n").unwrap();

    let rows = convert_file(&input, &output, flags(true, true, true, true)).unwrap();
    assert_eq!(rows, 1);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "network,network_start_ip,network_last_ip,network_start_integer,network_last_integer,network_start_hex,network_last_hex,something\n\
         1.0.0.0/24,1.0.0.0,1.0.0.255,16777216,16777471,1000000,10000ff,some more\n"
    );
}

#[test]
fn test_file_bad_network() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");
    std::fs::write(&input, "network\n1.0.0.0/24\nbogus/8\n").unwrap();

    let err = convert_file(&input, dir.path().join("out.csv"), flags(false, true, false, false))
        .unwrap_err();
    assert!(matches!(err, ConvertError::ParseNetwork { line: 3, .. }));
}
