#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

pub fn lvw() -> Command {
    cargo_bin_cmd!("lithoview")
}

/// Spawn a one-shot HTTP stub on an ephemeral port and return the endpoint
/// URL. The server answers exactly one request with the given status and
/// body, then shuts down with the thread.
pub fn stub_api(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head; its content does not matter.
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Status",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/api/lithology", addr)
}

/// An address nothing is listening on, for transport-failure tests.
pub fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/lithology", addr)
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lithoview_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A catalog with one entry: one populated section plus one blank
/// zero-depth section that the filter must drop.
pub const ONE_ENTRY: &str = r#"[
  {
    "title": "Borehole B-1",
    "tab_name": "B1",
    "description": "Reference borehole near the river bank",
    "pdf_filename": "Profile 1.pdf",
    "sections": [
      {"from_depth": "0", "to_depth": "1.2", "description": "brown clay, moist"},
      {"from_depth": 0, "to_depth": 0, "description": ""}
    ]
  }
]"#;

pub const TWO_ENTRIES: &str = r#"[
  {
    "title": "Borehole B-1",
    "tab_name": "B1",
    "description": "",
    "pdf_filename": "Profile 1.pdf",
    "sections": [
      {"from_depth": "0", "to_depth": "1.2", "description": "brown clay, moist"}
    ]
  },
  {
    "title": "Borehole B-2",
    "tab_name": "B2",
    "description": "",
    "pdf_filename": "",
    "sections": [
      {"from_depth": "1.2", "to_depth": "4", "description": "fine sand"}
    ]
  }
]"#;
