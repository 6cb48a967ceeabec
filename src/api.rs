use std::collections::BTreeSet;
use std::time::Duration;

use crate::error::{LottoError, Result};
use crate::types::{DrawResponse, WinningResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the published winning numbers for one round.
///
/// A non-200 status and a body whose `returnValue` is not `"success"` are
/// both terminal for the round, with distinct messages: the first means the
/// endpoint could not be queried, the second that the draw has not been
/// published yet.
pub async fn fetch_winning_result(base_url: &str, round: u32) -> Result<WinningResult> {
    let client = reqwest::Client::new();
    let url = format!("{base_url}?method=getLottoNumber&drwNo={round}");

    let response = client.get(&url).timeout(FETCH_TIMEOUT).send().await?;
    if !response.status().is_success() {
        return Err(LottoError::Unavailable(format!(
            "{round}회차 당첨 정보를 조회할 수 없습니다."
        )));
    }

    let body: DrawResponse = response.json().await?;
    winning_from_response(round, body)
}

fn winning_from_response(round: u32, body: DrawResponse) -> Result<WinningResult> {
    if body.return_value != "success" {
        return Err(LottoError::Unavailable(format!(
            "{round}회차 당첨 정보가 아직 없습니다."
        )));
    }

    let missing =
        || LottoError::InvalidFormat(format!("{round}회차 응답에 당첨 번호가 없습니다."));

    let fields = [body.no1, body.no2, body.no3, body.no4, body.no5, body.no6];
    let mut numbers = BTreeSet::new();
    for field in fields {
        numbers.insert(field.ok_or_else(missing)?);
    }

    Ok(WinningResult {
        round,
        draw_date: body.draw_date.ok_or_else(missing)?,
        numbers,
        bonus: body.bonus.ok_or_else(missing)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_becomes_winning_result() {
        let body: DrawResponse = serde_json::from_str(
            r#"{
                "returnValue": "success",
                "drwNo": 1149,
                "drwNoDate": "2024-12-07",
                "drwtNo1": 4, "drwtNo2": 8, "drwtNo3": 22,
                "drwtNo4": 26, "drwtNo5": 32, "drwtNo6": 38,
                "bnusNo": 12,
                "totSellamnt": 117119887000
            }"#,
        )
        .unwrap();

        let winning = winning_from_response(1149, body).unwrap();
        assert_eq!(winning.round, 1149);
        assert_eq!(winning.draw_date, "2024-12-07");
        assert_eq!(
            winning.numbers.iter().copied().collect::<Vec<_>>(),
            vec![4, 8, 22, 26, 32, 38]
        );
        assert_eq!(winning.bonus, 12);
    }

    #[test]
    fn unpublished_draw_is_unavailable() {
        let body: DrawResponse = serde_json::from_str(r#"{"returnValue": "fail"}"#).unwrap();
        let err = winning_from_response(9999, body).unwrap_err();
        assert!(matches!(err, LottoError::Unavailable(_)), "{err}");
        assert!(err.to_string().contains("9999"));
    }

    #[test]
    fn success_body_missing_numbers_is_invalid() {
        let body: DrawResponse =
            serde_json::from_str(r#"{"returnValue": "success", "drwNoDate": "2024-12-07"}"#)
                .unwrap();
        assert!(matches!(
            winning_from_response(1149, body),
            Err(LottoError::InvalidFormat(_))
        ));
    }
}
