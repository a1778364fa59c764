use url::Url;

use crate::classify::OutcomeMap;
use crate::core::{CheckinClient, CheckinError, net};
use crate::parse::ResponseParser;

use super::model::{Location, SubmitRequest};
use super::wire::{GeneralForm, OneClickQuery, SharedParams};

async fn extract_marker(
    resp: reqwest::Response,
    parser: &dyn ResponseParser,
) -> Result<String, CheckinError> {
    let body = net::get_text(resp).await?;
    parser
        .extract(&body)
        .ok_or(CheckinError::UnrecognizedResponse(body))
}

/// The lightweight GET check-in.
///
/// Returns whether the server accepted it (or already has today's
/// registration). A classified refusal is reported as `Ok(false)` so the
/// caller can fall back; only transport, status, and unrecognized-response
/// problems are errors.
pub(super) async fn one_click(
    client: &CheckinClient,
    url: &Url,
    params: &SharedParams,
    outcomes: &OutcomeMap,
    parser: &dyn ResponseParser,
) -> Result<bool, CheckinError> {
    tracing::info!("attempting one-click check-in");
    let resp = client
        .http()
        .get(url.clone())
        .query(&OneClickQuery::new(params))
        .send()
        .await?;
    let marker = extract_marker(resp, parser).await?;
    let accepted = outcomes.classify(&marker)?;
    if accepted {
        tracing::info!(%marker, "one-click check-in accepted");
    } else {
        tracing::warn!(%marker, "one-click check-in refused, falling back to general form");
    }
    Ok(accepted)
}

/// The form-based POST check-in carrying the full location.
pub(super) async fn general(
    client: &CheckinClient,
    url: &Url,
    location: &Location,
    params: &SharedParams,
    outcomes: &OutcomeMap,
    parser: &dyn ResponseParser,
) -> Result<(), CheckinError> {
    tracing::info!(
        province = %location.province,
        city = %location.city,
        area = %location.area,
        "submitting general check-in form"
    );
    let resp = client
        .http()
        .post(url.clone())
        .query(params)
        .form(&GeneralForm::new(location))
        .send()
        .await?;
    let marker = extract_marker(resp, parser).await?;
    if outcomes.classify(&marker)? {
        tracing::info!(%marker, "general check-in accepted");
        Ok(())
    } else {
        Err(CheckinError::GeneralRejected(marker))
    }
}

pub(super) async fn submit_request(
    client: &CheckinClient,
    request: &SubmitRequest,
    stamp: &str,
    parser: &dyn ResponseParser,
) -> Result<(), CheckinError> {
    let params = SharedParams {
        id: request.id.clone(),
        id2: stamp.to_string(),
    };
    let outcomes = OutcomeMap::for_stamp(stamp);
    let location = Location::from(&request.userinfo);

    tracing::info!(user = %request.userinfo.name, stamp, "submitting daily check-in");

    // The server rejects one-click until a general registration exists for
    // the day, so first runs go straight to the form.
    if request.is_first_exec {
        return general(
            client,
            &request.urls.general,
            &location,
            &params,
            &outcomes,
            parser,
        )
        .await;
    }

    let accepted = one_click(client, &request.urls.one_click, &params, &outcomes, parser).await?;
    if !accepted {
        general(
            client,
            &request.urls.general,
            &location,
            &params,
            &outcomes,
            parser,
        )
        .await?;
    }
    Ok(())
}
