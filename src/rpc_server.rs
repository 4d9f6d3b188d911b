//! laterlist RPC server — JSON-RPC over stdin/stdout for the page-agent bridge.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"saveVideo", "params":{"videoData":{...}}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use laterlist::app::App;
use laterlist::coordinator::Coordinator;
use laterlist::rpc_handler::handle_method;

use serde_json::{json, Value};

fn write_line(value: &Value) {
    println!("{}", value);
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // Prefer LATERLIST_DATA_DIR, fall back to the executable's directory
    let db_path = if let Ok(dir) = std::env::var("LATERLIST_DATA_DIR") {
        std::path::PathBuf::from(dir).join("laterlist.db")
    } else if let Ok(exe) = std::env::current_exe() {
        exe.parent()
            .unwrap_or(std::path::Path::new("."))
            .join("laterlist.db")
    } else {
        std::path::PathBuf::from("laterlist.db")
    };

    let mut app = App::new(db_path.to_str().unwrap_or("laterlist.db"))
        .expect("Failed to initialize laterlist store");
    app.startup();
    let coordinator = Coordinator::spawn(app);

    // Signal ready
    write_line(&json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_line(&json!({"id":null,"error":format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&coordinator, method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        write_line(&response);
    }
}
