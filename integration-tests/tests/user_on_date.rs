use integration_tests::harness::{LogFixture, Row, at};
use logmetrics_core::cli::metrics::run_metrics;
use pretty_assertions::assert_eq;

fn fixture() -> LogFixture {
    LogFixture::new(&[
        Row::new(at(2020, 4, 15, 0), "jeff22", "upload", "10"),
        Row::new(at(2020, 4, 15, 23), "jeff22", "upload", "20"),
        Row::new(at(2020, 4, 15, 9), "jeff22", "download", "30"),
        Row::new(at(2020, 4, 16, 9), "jeff22", "upload", "40"),
        Row::new(at(2020, 4, 15, 9), "sarah94", "upload", "50"),
    ])
}

#[test]
fn counts_user_uploads_on_a_day_regardless_of_time() {
    let log = fixture();

    let report = run_metrics(&log.config("uploadsByUser[jeff22]OnDate[15 04 2020]")).unwrap();

    assert_eq!(report.value, 2);
    assert_eq!(
        report.to_string(),
        "The number of uploads by jeff22 on 15 04 2020 is: 2"
    );
}

#[test]
fn counts_user_downloads_on_a_day() {
    let log = fixture();

    let report =
        run_metrics(&log.config("downloadsByUserOnDate{r[jeff22]e[15 04 2020]}")).unwrap();

    assert_eq!(report.value, 1);
}

#[test]
fn other_day_and_unknown_user_count_nothing() {
    let log = fixture();

    let other_day = run_metrics(&log.config("downloadsByUser[jeff22]OnDate[16 04 2020]")).unwrap();
    let nobody = run_metrics(&log.config("uploadsByUser[nobody]OnDate[15 04 2020]")).unwrap();

    assert_eq!(other_day.value, 0);
    assert_eq!(nobody.value, 0);
}
