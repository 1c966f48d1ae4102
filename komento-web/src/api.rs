use komento_client::api::Question;

/// Origin of the current page, where the question list is served
pub fn host() -> anyhow::Result<String> {
    web_sys::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .location()
        .origin()
        .map_err(|e| anyhow::anyhow!("reading page origin: {e:?}"))
}

pub async fn fetch_questions(host: &str) -> anyhow::Result<Vec<Question>> {
    Ok(crate::CLIENT
        .get(format!("{host}/api/questions"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?)
}
