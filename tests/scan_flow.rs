use honeypot_scanner::explorer::parse_source_response;
use honeypot_scanner::{matcher, report, Chain, ContractQuery, Report};

const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

#[test]
fn canned_response_reports_blacklist_and_disable_sell() {
    // Explorer response as returned by the getsourcecode endpoint
    let body = r#"{
        "status": "1",
        "message": "OK",
        "result": [
            {
                "SourceCode": "function sell() { require(!blacklist[msg.sender]); }",
                "ABI": "[]",
                "ContractName": "Token"
            }
        ]
    }"#;

    let source = parse_source_response(body).expect("canned response should parse");
    let findings = matcher::scan(&source);

    let names: Vec<&str> = findings.iter().map(|f| f.pattern.as_str()).collect();
    assert_eq!(names, vec!["blacklist", "disableSell"]);

    // The JSON file must carry exactly the same two findings
    let query = ContractQuery::new(ADDRESS, Chain::Bsc).unwrap();
    let scan_report = Report::new(&query, findings);

    let dir = std::env::temp_dir().join("honeypot_scanner_scan_flow");
    std::fs::create_dir_all(&dir).unwrap();

    let path = report::write_json(&scan_report, &dir).expect("report should write");
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        format!("{}_honeypot_report.json", ADDRESS)
    );

    let body = std::fs::read_to_string(&path).unwrap();
    let parsed: Report = serde_json::from_str(&body).unwrap();

    assert_eq!(parsed, scan_report);
    assert_eq!(parsed.contract, ADDRESS);
    assert_eq!(parsed.chain, "bsc");
    assert_eq!(parsed.findings.len(), 2);
    assert_eq!(parsed.findings[0].pattern, "blacklist");
    assert_eq!(parsed.findings[1].pattern, "disableSell");
}

#[test]
fn clean_source_produces_empty_report() {
    let body = r#"{"status":"1","message":"OK","result":[{"SourceCode":"pragma solidity ^0.8.0; interface IERC20 {}"}]}"#;

    let source = parse_source_response(body).expect("canned response should parse");
    let findings = matcher::scan(&source);
    assert!(findings.is_empty());

    let query = ContractQuery::new(ADDRESS, Chain::Eth).unwrap();
    let scan_report = Report::new(&query, findings);

    let dir = std::env::temp_dir().join("honeypot_scanner_clean_flow");
    std::fs::create_dir_all(&dir).unwrap();

    let path = report::write_json(&scan_report, &dir).unwrap();
    let parsed: Report = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert!(parsed.findings.is_empty());
    assert_eq!(parsed.chain, "eth");
}
