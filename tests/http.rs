use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct LogEntry {
    mood: String,
    craving_level: String,
    nicotine_amount: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TodayResponse {
    date: String,
    entries: Vec<LogEntry>,
}

#[derive(Debug, Deserialize)]
struct ValidationResponse {
    valid: bool,
    message: Option<String>,
    amount_required: bool,
}

#[derive(Debug, Deserialize)]
struct Bar {
    height_pct: f64,
}

#[derive(Debug, Deserialize)]
struct BarChart {
    bars: Vec<Bar>,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    last_7_days: Vec<serde_json::Value>,
    intake_chart: BarChart,
}

#[derive(Debug, Deserialize)]
struct ProgressReport {
    quit_date: Option<String>,
    days_to_goal: Option<i64>,
    money_saved: String,
}

#[derive(Debug, Deserialize)]
struct Achievement {
    id: String,
    earned: bool,
}

#[derive(Debug, Deserialize)]
struct AchievementsResponse {
    achievements: Vec<Achievement>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    id: u64,
    message: String,
    likes: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("nicotine_free_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/today")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_nicotine_free"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("APP_CONFIRM_DELAY_MS", "500")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn today(client: &Client, server: &TestServer) -> TodayResponse {
    client
        .get(format!("{}/api/today", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_valid_log_is_recorded_for_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = today(&client, &server).await;

    let response = client
        .post(format!("{}/api/logs", server.base_url))
        .json(&serde_json::json!({
            "mood": "great",
            "craving_level": "none",
            "nicotine_product": "vape",
            "nicotine_amount": " 6mg ",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry: LogEntry = response.json().await.unwrap();
    assert_eq!(entry.mood, "great");
    assert_eq!(entry.craving_level, "none");
    assert_eq!(entry.nicotine_amount.as_deref(), Some("6mg"));

    let after = today(&client, &server).await;
    assert_eq!(after.entries.len(), before.entries.len() + 1);
    assert!(!after.date.is_empty());
}

#[tokio::test]
async fn http_vape_without_amount_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = today(&client, &server).await;

    let response = client
        .post(format!("{}/api/logs", server.base_url))
        .json(&serde_json::json!({
            "mood": "okay",
            "craving_level": "high",
            "nicotine_product": "vape",
            "nicotine_amount": "",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.text().await.unwrap(),
        "Nicotine amount is required for vapes"
    );

    let after = today(&client, &server).await;
    assert_eq!(after.entries.len(), before.entries.len());
}

#[tokio::test]
async fn http_validate_reports_button_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let result: ValidationResponse = client
        .post(format!("{}/api/validate", server.base_url))
        .json(&serde_json::json!({ "mood": "good", "nicotine_product": "pouch" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!result.valid);
    assert!(result.amount_required);
    assert_eq!(
        result.message.as_deref(),
        Some("Nicotine amount is required for nicotine pouches")
    );

    let response = client
        .post(format!("{}/api/validate", server.base_url))
        .json(&serde_json::json!({ "mood": "elated" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn http_form_post_shows_confirmation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/log", server.base_url))
        .form(&[
            ("mood", "good"),
            ("craving_level", "low"),
            ("nicotine_product", ""),
            ("usage_comparison", "reduced"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.text().await.unwrap();
    assert!(page.contains("Great job cutting back"));
    assert!(page.contains(r#"content="1;url=/""#));

    let response = client
        .post(format!("{}/log", server.base_url))
        .form(&[("mood", "good"), ("nicotine_product", "pouch")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let page = response.text().await.unwrap();
    assert!(page.contains("Nicotine amount is required for nicotine pouches"));
}

#[tokio::test]
async fn http_stats_cover_a_week() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.last_7_days.len(), 7);
    assert_eq!(stats.intake_chart.bars.len(), 7);
    assert!(stats.intake_chart.bars.iter().all(|b| b.height_pct > 0.0));
}

#[tokio::test]
async fn http_community_messages_can_be_posted_and_liked() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/messages", server.base_url))
        .json(&serde_json::json!({ "message": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let posted: ChatMessage = client
        .post(format!("{}/api/messages", server.base_url))
        .json(&serde_json::json!({ "message": " Day one, feeling determined " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posted.message, "Day one, feeling determined");
    assert_eq!(posted.likes, 0);

    let liked: ChatMessage = client
        .post(format!("{}/api/messages/{}/like", server.base_url, posted.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(liked.likes, 1);

    let missing = client
        .post(format!("{}/api/messages/999999/like", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_quit_date_drives_progress_and_achievements() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/goal", server.base_url))
        .json(&serde_json::json!({ "quit_date": "someday" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let progress: ProgressReport = client
        .post(format!("{}/api/goal", server.base_url))
        .json(&serde_json::json!({ "quit_date": "2000-01-01" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(progress.quit_date.as_deref(), Some("2000-01-01"));
    assert_eq!(progress.days_to_goal, Some(0));
    assert!(progress.money_saved.starts_with('$'));

    let achievements: AchievementsResponse = client
        .get(format!("{}/api/achievements", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let earned = |id: &str| {
        achievements
            .achievements
            .iter()
            .any(|a| a.id == id && a.earned)
    };
    assert!(earned("quit-date-set"));
    assert!(earned("tracker-created"));

    let page = client
        .post(format!("{}/goal", server.base_url))
        .form(&[("quit_date", "2000-01-02")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"value="2000-01-02""#));
}
