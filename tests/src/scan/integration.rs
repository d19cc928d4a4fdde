#![cfg(test)]
use nmapr_common::{ConfigError, Error, ValidationError};
use nmapr_core::{diff, ScanConfig};
use nmapr_integration_tests::fixtures::{FakeRunner, FIRST_SNAPSHOT, ROUTER_RESCAN};

fn lan_config() -> ScanConfig {
    ScanConfig::new()
        .add_hosts(["192.168.1.0/30"])
        .add_ports([22, 80, 443])
}

#[tokio::test]
async fn scan_runs_compiled_arguments_and_indexes_hosts() {
    let runner = FakeRunner::new().with_stdout(FIRST_SNAPSHOT);
    let config = lan_config();

    let scan = runner.scanner().run(&config).await.unwrap();

    assert_eq!(
        runner.calls(),
        vec![vec!["-oX", "-", "-sT", "-p22,80,443", "192.168.1.0/30"]]
    );
    assert_eq!(scan.len(), 2);
    assert_eq!(
        scan.display_args(),
        "nmap -oX - -sT -p22,80,443 192.168.1.0/30"
    );

    let router = scan.get_host("192.168.1.1").unwrap();
    assert_eq!(router.address_type, "ipv4");
    assert_eq!(router.parent_config(), &config);
    assert_eq!(
        router.open_ports().map(|port| port.id).collect::<Vec<_>>(),
        vec![80, 443]
    );
}

#[tokio::test]
async fn hosts_are_found_by_any_hostname() {
    let runner = FakeRunner::new().with_stdout(FIRST_SNAPSHOT);
    let scan = runner.scanner().run(&lan_config()).await.unwrap();

    assert_eq!(scan.get_host("files.lan").unwrap().address, "192.168.1.2");
    assert_eq!(scan.get_host("nas.lan").unwrap().address, "192.168.1.2");
    assert_eq!(scan.get_host("router.lan").unwrap().address, "192.168.1.1");
    assert!(scan.get_host("printer.lan").is_none());
}

#[tokio::test]
async fn rescan_targets_one_host_and_diff_reports_changes() {
    let runner = FakeRunner::new()
        .with_stdout(FIRST_SNAPSHOT)
        .with_stdout(ROUTER_RESCAN);
    let scanner = runner.scanner();

    let first = scanner.run(&lan_config()).await.unwrap();
    let before = first.get_host("router.lan").unwrap();

    let rescan = before.rescan();
    assert_eq!(rescan.hosts(), ["192.168.1.1".to_string()]);
    assert_eq!(rescan.generic_ports(), lan_config().generic_ports());

    let second = scanner.run(&rescan).await.unwrap();
    let after = second.get_host("192.168.1.1").unwrap();

    assert_eq!(
        runner.calls()[1],
        vec!["-oX", "-", "-sT", "-p22,80,443", "192.168.1.1"]
    );

    let changes = before.diff(&after);
    assert_eq!(
        changes.added.iter().map(|port| port.id).collect::<Vec<_>>(),
        vec![22]
    );
    assert_eq!(
        changes.removed.iter().map(|port| port.id).collect::<Vec<_>>(),
        vec![80]
    );

    let reverse = diff(&after, &before);
    assert_eq!(reverse.added, changes.removed);
    assert_eq!(reverse.removed, changes.added);
}

#[tokio::test]
async fn rescan_with_flags_keeps_original_flags_first() {
    let runner = FakeRunner::new()
        .with_stdout(FIRST_SNAPSHOT)
        .with_stdout(ROUTER_RESCAN);
    let scanner = runner.scanner();

    let config = lan_config().add_flags(["-T4"]);
    let first = scanner.run(&config).await.unwrap();
    let rescan = first
        .get_host("192.168.1.1")
        .unwrap()
        .rescan_with_flags(["-sV"]);
    scanner.run(&rescan).await.unwrap();

    assert_eq!(
        runner.calls()[1],
        vec!["-oX", "-", "-T4", "-sV", "-sT", "-p22,80,443", "192.168.1.1"]
    );
    assert_eq!(config.flags(), ["-T4".to_string()]);
}

#[tokio::test]
async fn failed_process_surfaces_stderr() {
    let runner = FakeRunner::new().with_failure("exit status: 1", "QUITTING!");

    let err = runner.scanner().run(&lan_config()).await.unwrap_err();

    match err {
        Error::Execution { message } => assert!(message.contains("QUITTING!")),
        other => panic!("expected execution error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_configs_never_reach_the_runner() {
    let runner = FakeRunner::new().with_stdout(FIRST_SNAPSHOT);
    let scanner = runner.scanner();

    let with_output_flag = lan_config().add_flags(["-oG", "out.txt"]);
    assert!(matches!(
        scanner.run(&with_output_flag).await,
        Err(Error::Validation(ValidationError::DisallowedFlag { .. }))
    ));

    let without_hosts = ScanConfig::new().add_ports([22]);
    assert!(matches!(
        scanner.run(&without_hosts).await,
        Err(Error::Config(ConfigError::NoHosts))
    ));

    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn malformed_output_is_a_parse_error() {
    let runner = FakeRunner::new().with_stdout(r#"<nmaprun args="nmap"><host><status state="up"/>"#);
    let err = runner.scanner().run(&lan_config()).await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
