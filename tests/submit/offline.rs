use httpmock::{
    Method::{GET, POST},
    MockServer,
};
use url::Url;

use checkin_rs::{CheckinClient, CheckinError, SubmitBuilder};

use crate::common;

fn endpoints(server: &MockServer) -> (Url, Url) {
    (
        Url::parse(&server.url("/weekly9.asp")).unwrap(),
        Url::parse(&server.url("/weekly.asp")).unwrap(),
    )
}

#[tokio::test]
async fn general_form_carries_fixed_flags_and_sentinels() {
    let server = MockServer::start();

    // Strict when-side matchers: the test only passes if the body actually
    // carries the location triple, the declarative flags, and the literal
    // "undefined" sentinels.
    let general = server.mock(|when, then| {
        when.method(POST)
            .path("/weekly.asp")
            .query_param("id", "123")
            .query_param("id2", common::STAMP)
            .form_urlencoded_tuple("province", "A")
            .form_urlencoded_tuple("city", "B")
            .form_urlencoded_tuple("area", "C")
            .form_urlencoded_tuple("wuhan", "否")
            .form_urlencoded_tuple("fare", "否")
            .form_urlencoded_tuple("wls", "否")
            .form_urlencoded_tuple("kesou", "否")
            .form_urlencoded_tuple("zhengduan", "")
            .form_urlencoded_tuple("Submit", "提交")
            .form_urlencoded_tuple("action", "add")
            .form_urlencoded_tuple("adds", "undefined")
            .form_urlencoded_tuple("addsxy", "undefined");
        then.status(200).body("提交成功");
    });

    let (one_click, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    SubmitBuilder::new(&client, common::request(one_click, general_url, true))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap();

    general.assert();
}

#[tokio::test]
async fn one_click_query_carries_sentinels() {
    let server = MockServer::start();

    let one_click = server.mock(|when, then| {
        when.method(GET)
            .path("/weekly9.asp")
            .query_param("id", "123")
            .query_param("id2", common::STAMP)
            .query_param("adds", "undefined")
            .query_param("addsxy", "undefined");
        then.status(200).body("提交成功");
    });

    let (one_click_url, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    SubmitBuilder::new(&client, common::request(one_click_url, general_url, false))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap();

    one_click.assert();
}

#[tokio::test]
async fn general_rejection_error_carries_server_marker() {
    let server = MockServer::start();

    let general = server.mock(|when, then| {
        when.method(POST).path("/weekly.asp");
        then.status(200).body("登记失败");
    });

    let (one_click, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    let err = SubmitBuilder::new(&client, common::request(one_click, general_url, true))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap_err();

    general.assert();
    assert!(matches!(err, CheckinError::GeneralRejected(ref raw) if raw == "登记失败"));
    let rendered = err.to_string();
    assert!(rendered.contains("general registration failed"));
    assert!(rendered.contains("登记失败"));
}

#[tokio::test]
async fn unrecognized_response_is_a_typed_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/weekly9.asp");
        then.status(200).body("服务器繁忙");
    });

    let (one_click, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    let err = SubmitBuilder::new(&client, common::request(one_click, general_url, false))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap_err();

    assert!(matches!(err, CheckinError::UnrecognizedResponse(ref raw) if raw == "服务器繁忙"));
}

#[tokio::test]
async fn http_status_error_surfaces() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/weekly.asp");
        then.status(500).body("Internal Server Error");
    });

    let (one_click, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    let err = SubmitBuilder::new(&client, common::request(one_click, general_url, true))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap_err();

    assert!(matches!(err, CheckinError::Status { status: 500, .. }));
}

#[tokio::test]
async fn alert_page_is_parsed_through_the_full_path() {
    let server = MockServer::start();

    let one_click = server.mock(|when, then| {
        when.method(GET).path("/weekly9.asp");
        then.status(200).body(
            "<html><script language='javascript'>\
             alert('提交成功');window.location.href='weekly.asp';\
             </script></html>",
        );
    });

    let (one_click_url, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    SubmitBuilder::new(&client, common::request(one_click_url, general_url, false))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap();

    one_click.assert();
}

#[tokio::test]
async fn already_registered_today_counts_as_success() {
    let server = MockServer::start();

    let one_click = server.mock(|when, then| {
        when.method(GET).path("/weekly9.asp");
        then.status(200)
            .body(format!("{}登记已存在", common::STAMP));
    });
    let general = server.mock(|when, then| {
        when.method(POST).path("/weekly.asp");
        then.status(200).body("提交成功");
    });

    let (one_click_url, general_url) = endpoints(&server);
    let client = CheckinClient::builder().build().unwrap();

    SubmitBuilder::new(&client, common::request(one_click_url, general_url, false))
        .date_stamp(common::STAMP)
        .submit()
        .await
        .unwrap();

    one_click.assert();
    assert_eq!(general.hits(), 0, "already-registered must not fall back");
}
