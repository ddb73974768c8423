use time::macros::{
    date,
    datetime,
};
use vprikol::{
    types::{
        CheckRpOverrideRequest,
        OverrideKind,
        OverrideStatus,
        PrivacyPlatform,
        PrivacyToggleRequest,
        Rating,
        ServerStatus,
        ServerStatusReport,
        StatResponseType,
        TokenStat,
        UpdateTokenRequest,
    },
    Bytes,
    Client,
    Error,
    PlayerQuery,
    PunishType,
    RatingType,
    Screenshot,
    SSFont,
};
use wiremock::{
    matchers::{
        body_json,
        method,
        path,
        query_param,
        query_param_is_missing,
    },
    Mock,
    MockServer,
    ResponseTemplate,
};

const FIND: &str = include_str!("../test_data/find.json");
const STATUS: &str = include_str!("../test_data/status.json");
const RATING: &str = include_str!("../test_data/rating.json");
const PUNISHES: &str = include_str!("../test_data/punishes.json");
const TOKEN: &str = include_str!("../test_data/token.json");
const ITEMS: &str = include_str!("../test_data/items.json");

fn client(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .token("test-token")
        .build()
        .expect("failed to build client")
}

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

#[tokio::test]
async fn find_player_by_nickname() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/find"))
        .and(query_param("server_id", "5"))
        .and(query_param("nickname", "Bob"))
        .and(query_param_is_missing("account_id"))
        .respond_with(json(&FIND.replace("Bob_Smith", "Bob")))
        .expect(1)
        .mount(&server)
        .await;

    let player = client(&server)
        .find_player(PlayerQuery::by_nickname(5, "Bob"))
        .await
        .expect("failed to find player");
    assert!(&*player.general.nickname == "Bob");
    assert!(player.general.account_id == 1234567);
}

#[tokio::test]
async fn find_player_without_identifier_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(json(FIND))
        .expect(0)
        .mount(&server)
        .await;

    let error = client(&server)
        .find_player(PlayerQuery {
            server_id: 5,
            nickname: None,
            account_id: None,
        })
        .await
        .expect_err("found a player without an identifier");
    assert!(matches!(error, Error::InvalidArguments(_)));
}

#[tokio::test]
async fn empty_nickname_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/find/online"))
        .and(query_param("nickname", ""))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Player not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let error = client(&server)
        .player_online(PlayerQuery::by_nickname(5, ""))
        .await
        .expect_err("found a player with an empty nickname");
    assert!(error.as_api_error().and_then(|error| error.message()) == Some("Player not found"));
}

#[tokio::test]
async fn status_of_every_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param_is_missing("server_id"))
        .respond_with(json(&format!("[{STATUS}, {STATUS}]")))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server)
        .status(None)
        .await
        .expect("failed to get status");
    match status {
        ServerStatus::All(statuses) => assert!(statuses.len() == 2),
        status => panic!("unexpected status {status:?}"),
    }
}

#[tokio::test]
async fn status_of_one_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("server_id", "5"))
        .respond_with(json(STATUS))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server)
        .status(Some(5))
        .await
        .expect("failed to get status");
    assert!(matches!(status, ServerStatus::Single(_)));
    assert!(status.servers()[0].online_players == 873);
}

#[tokio::test]
async fn status_of_one_server_as_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(query_param("server_id", "5"))
        .respond_with(json(&format!("[{STATUS}]")))
        .expect(1)
        .mount(&server)
        .await;

    let status = client(&server)
        .status(Some(5))
        .await
        .expect("failed to get status");
    match status {
        ServerStatus::Single(status) => assert!(status.online_players == 873),
        status => panic!("unexpected status {status:?}"),
    }
}

#[tokio::test]
async fn rating_variant_follows_server_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rating"))
        .and(query_param("rating_type", "richest"))
        .and(query_param("server_id", "5"))
        .respond_with(json(RATING))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rating"))
        .and(query_param("rating_type", "lvl_families"))
        .and(query_param_is_missing("server_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rating_type": "lvl_families",
            "updated_at": "2024-03-01T12:00:00+03:00",
            "players": [
                { "position": 1, "nickname": "Smith", "value": 12, "server_id": 5, "server_label": "Red-Rock" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let rating = client
        .rating(RatingType::Richest, Some(5))
        .await
        .expect("failed to get rating");
    assert!(matches!(rating, Rating::Server(_)));

    let rating = client
        .rating(RatingType::LvlFamilies, None)
        .await
        .expect("failed to get rating");
    match rating {
        Rating::CrossServer(rating) => assert!(rating.players[0].server_id == Some(5)),
        rating => panic!("unexpected rating {rating:?}"),
    }
}

#[tokio::test]
async fn punishes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/punishes"))
        .and(query_param("server_id", "5"))
        .and(query_param("punish_type", "banip"))
        .and(query_param("start_datetime", "2024-03-01T03:00:00+03:00"))
        .and(query_param("offset", "0"))
        .and(query_param_is_missing("player_nickname"))
        .and(query_param_is_missing("end_datetime"))
        .respond_with(json(PUNISHES))
        .expect(1)
        .mount(&server)
        .await;

    let punishes = client(&server)
        .list_punishes(5)
        .punish_type(Some(PunishType::BanIp))
        .start(Some(datetime!(2024-03-01 00:00:00 UTC)))
        .offset(Some(0))
        .execute()
        .await
        .expect("failed to list punishes");
    assert!(punishes.data.len() == 2);
}

#[tokio::test]
async fn limit_too_large_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(json(PUNISHES))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let error = client
        .list_sessions(PlayerQuery::by_account_id(5, 1234567))
        .limit(Some(vprikol::MAX_LIMIT + 1))
        .execute()
        .await
        .expect_err("sent a limit over the max");
    assert!(matches!(error, Error::InvalidArguments(_)));

    let error = client
        .player_calendar(5, "Bob_Smith", 2024, 13)
        .await
        .expect_err("sent an invalid month");
    assert!(matches!(error, Error::InvalidArguments(_)));

    let error = client
        .check_rp(None, None)
        .await
        .expect_err("checked an rp name without a name");
    assert!(matches!(error, Error::InvalidArguments(_)));
}

#[tokio::test]
async fn token_stat_variant_follows_response_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stat"))
        .and(query_param("response_type", "counts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": 3,
            "methods": { "find": 2, "status": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let methods = ["find", "status"];
    let stat = client(&server)
        .token_stat(StatResponseType::Counts)
        .methods(Some(&methods[..]))
        .execute()
        .await
        .expect("failed to get token stat");
    match stat {
        TokenStat::Counts(counts) => assert!(counts.methods["find"] == 2),
        stat => panic!("unexpected stat {stat:?}"),
    }

    let requests = server
        .received_requests()
        .await
        .expect("request recording is off");
    let sent_methods: Vec<_> = requests[0]
        .url
        .query_pairs()
        .filter(|(name, _)| name == "methods")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert!(sent_methods == ["find", "status"]);
}

#[tokio::test]
async fn toggle_privacy_sends_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/find/privacy"))
        .and(body_json(serde_json::json!({
            "platform": "vk",
            "user_id": 42,
            "server_id": 5,
            "nickname": "Bob_Smith",
            "is_superadmin": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .toggle_privacy(&PrivacyToggleRequest {
            platform: PrivacyPlatform::Vk,
            user_id: 42,
            server_id: 5,
            nickname: "Bob_Smith".into(),
            is_superadmin: false,
        })
        .await
        .expect("failed to toggle privacy");
}

#[tokio::test]
async fn generate_ss_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_ss"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(&b"\x89PNG rendered"[..], "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let mut screenshot = Screenshot::new(
        Bytes::from_static(b"\x89PNG source"),
        vec!["/me waves".into(), "/do smiles".into()],
    );
    screenshot.font = SSFont::RobotoBold;

    let image = client(&server)
        .generate_ss(&screenshot)
        .await
        .expect("failed to generate screenshot");
    assert!(&image[..] == b"\x89PNG rendered");

    let requests = server
        .received_requests()
        .await
        .expect("request recording is off");
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .expect("missing content type");
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.matches("name=\"screen\"; filename=\"screen.png\"").count() == 1);
    assert!(body.contains("application/octet-stream"));
    assert!(body.matches("name=\"commands\"").count() == 2);
    assert!(body.contains("/me waves"));
    assert!(body.contains("/do smiles"));
    assert!(body.contains("name=\"font\""));
    assert!(body.contains("robotobd.ttf"));
    assert!(body.contains("name=\"text_size\""));
    assert!(body.contains("name=\"text_top\""));
    assert!(!body.contains("name=\"commands_colors\""));
}

#[tokio::test]
async fn item_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/522/market"))
        .and(query_param_is_missing("server_id"))
        .respond_with(json(include_str!("../test_data/item_market.json")))
        .expect(1)
        .mount(&server)
        .await;

    let market = client(&server)
        .item_market_stats(522, None)
        .await
        .expect("failed to get market stats");
    assert!(market.item_id == 522);
}

#[tokio::test]
async fn report_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/internal/status"))
        .and(body_json(serde_json::json!({
            "server_id": 5,
            "online_players": 873,
            "queue_players": 0,
            "max_players": 1000,
            "is_closed": false,
            "payday_boost": 2,
            "multiplier_donate": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accepted": true,
            "anything": ["else"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .report_status(&ServerStatusReport {
            server_id: 5,
            online_players: 873,
            queue_players: 0,
            max_players: 1000,
            is_closed: false,
            payday_boost: 2,
            multiplier_donate: 1,
        })
        .await
        .expect("failed to report status");
}

#[tokio::test]
async fn update_token_sends_put_json() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/tokens/17"))
        .and(body_json(serde_json::json!({
            "project_label": "stats-bot",
            "activated": false,
        })))
        .respond_with(json(TOKEN))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server)
        .update_token(
            17,
            &UpdateTokenRequest {
                project_label: Some("stats-bot".into()),
                activated: Some(false),
                ..Default::default()
            },
        )
        .await
        .expect("failed to update token");
    assert!(token.id == 17);
}

#[tokio::test]
async fn regenerate_token_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/tokens/17/regenerate"))
        .respond_with(json(TOKEN))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server)
        .regenerate_token(17)
        .await
        .expect("failed to regenerate token");
    assert!(&*token.project_label == "stats-bot");
}

#[tokio::test]
async fn check_rp_override_put_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/checkrp/overrides"))
        .and(body_json(serde_json::json!({
            "kind": "surname",
            "value": "Smith",
            "status": "denied",
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/admin/checkrp/overrides"))
        .and(query_param("kind", "surname"))
        .and(query_param("value", "Smith"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .set_check_rp_override(&CheckRpOverrideRequest {
            kind: OverrideKind::Surname,
            value: "Smith".into(),
            status: OverrideStatus::Denied,
        })
        .await
        .expect("failed to set override");
    client
        .delete_check_rp_override(OverrideKind::Surname, "Smith")
        .await
        .expect("failed to delete override");
}

#[tokio::test]
async fn money_history_dates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/find/money_history"))
        .and(query_param("server_id", "5"))
        .and(query_param("account_id", "1234567"))
        .and(query_param("start_date", "2024-03-05"))
        .and(query_param_is_missing("end_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "date": "2024-03-05", "value": 1500000 },
            { "date": "2024-03-06", "value": 1250000 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let history = client(&server)
        .money_history(5, 1234567, Some(date!(2024 - 03 - 05)), None)
        .await
        .expect("failed to get money history");
    assert!(history.len() == 2);
    assert!(history[1].date == date!(2024 - 03 - 06));
}

#[tokio::test]
async fn item_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "item_id": 522,
            "name": "Chest",
            "icon": "522.png",
            "acs_slot": null,
            "type": 3,
            "active": 1,
            "skin_id": null,
            "updated_at": "2024-02-20T10:00:00+03:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item = client(&server).item(522).await.expect("failed to get item");
    assert!(item.item_id == 522);
    assert!(item.market_stats.is_none());
}

#[tokio::test]
async fn list_items_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .and(query_param("search", "mask"))
        .and(query_param("item_type", "7"))
        .and(query_param("with_market_stats", "true"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "0"))
        .respond_with(json(ITEMS))
        .expect(1)
        .mount(&server)
        .await;

    let items = client(&server)
        .list_items()
        .search(Some("mask"))
        .item_type(Some(7))
        .with_market_stats(Some(true))
        .limit(Some(50))
        .offset(Some(0))
        .execute()
        .await
        .expect("failed to list items");
    assert!(items.total == 2);
}

#[tokio::test]
async fn list_shops_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/shops"))
        .and(query_param("server_id", "5"))
        .and(query_param("item_id", "522"))
        .and(query_param("nickname", "Bob_Smith"))
        .and(query_param("limit", "10"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total": 0,
            "limit": 10,
            "offset": 0,
            "shops": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let shops = client(&server)
        .list_shops()
        .server_id(Some(5))
        .item_id(Some(522))
        .nickname(Some("Bob_Smith"))
        .limit(Some(10))
        .execute()
        .await
        .expect("failed to list shops");
    assert!(shops.shops.is_empty());
}

#[tokio::test]
async fn non_finite_sessions_per_day_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    for min_sessions_per_day in [f64::NAN, f64::INFINITY] {
        let error = client
            .detect_bots(5, Some(min_sessions_per_day), None)
            .await
            .expect_err("sent a non-finite float");
        assert!(matches!(error, Error::InvalidArguments(_)));
    }
}
