use clap::Parser;
use rentora_cli::{run, AppState, Cli};

async fn exec(state: &AppState, args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("rentora").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli, state, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn test_list_add_and_book_flow() {
    let state = AppState::in_memory();

    let before: serde_json::Value =
        serde_json::from_str(&exec(&state, &["list", "--json"]).await.unwrap()).unwrap();
    let static_count = before.as_array().unwrap().len();

    let added: serde_json::Value = serde_json::from_str(
        &exec(
            &state,
            &[
                "add", "--json", "--title", "Studio X", "--category", "studio",
                "--location", "Noida", "--hourly", "500",
            ],
        )
        .await
        .unwrap(),
    )
    .unwrap();
    assert_eq!(added["id"], 1000);
    assert_eq!(added["priceDaily"], 2000);
    assert_eq!(added["rating"], 0.0);

    let after: serde_json::Value =
        serde_json::from_str(&exec(&state, &["list", "--json"]).await.unwrap()).unwrap();
    let after = after.as_array().unwrap();
    assert_eq!(after.len(), static_count + 1);
    assert_eq!(after.last().unwrap()["title"], "Studio X");

    let booking: serde_json::Value = serde_json::from_str(
        &exec(
            &state,
            &[
                "book", "1000", "--json", "--daily", "--name", "Priya Nair", "--card",
                "4242424242424242", "--expiry", "12/99", "--cvv", "123",
            ],
        )
        .await
        .unwrap(),
    )
    .unwrap();
    assert_eq!(booking["status"], "Confirmed");
    assert_eq!(booking["total"], 2200);
}

#[tokio::test]
async fn test_second_listing_gets_next_id() {
    let state = AppState::in_memory();
    for title in ["First", "Second"] {
        exec(
            &state,
            &[
                "add", "--title", title, "--category", "coworking", "--location",
                "Delhi", "--hourly", "100",
            ],
        )
        .await
        .unwrap();
    }

    let mine: serde_json::Value =
        serde_json::from_str(&exec(&state, &["mine", "--json"]).await.unwrap()).unwrap();
    let ids: Vec<u64> = mine
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1000, 1001]);
}

#[tokio::test]
async fn test_show_and_categories() {
    let state = AppState::in_memory();

    let detail = exec(&state, &["show", "2"]).await.unwrap();
    assert!(detail.contains("Boardroom with City View"));
    assert!(detail.contains("Meeting Rooms"));

    let categories = exec(&state, &["categories"]).await.unwrap();
    assert_eq!(categories.lines().count(), 12);
}
