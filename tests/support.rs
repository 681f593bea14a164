use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use catalog_stats::structs::category::CategoryTree;
use catalog_stats::structs::config::catalog_config::CatalogConfig;

pub const CATEGORY_TREE_JSON: &str = include_str!("test_data/getCategoryTree.json");
pub const PRODUCTS_JSON: &str = include_str!("test_data/listByCategory-1469-slim.json");

pub const TREE_PATH: &str = "/api/product/getCategoryTree";
pub const PRODUCTS_PATH: &str = "/api/product/listByCategory";

#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self { path, status: 200, body: body.into() }
    }

    pub fn status(path: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self { path, status, body: body.into() }
    }
}

/// Minimal HTTP/1.1 server answering each connection with one canned response.
pub struct CatalogServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle_connection(stream, &routes, &recorded);
            }
        });

        Self { base_url, requests }
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            category_tree_url: format!("{}{}", self.base_url, TREE_PATH),
            category_products_url: format!("{}{}", self.base_url, PRODUCTS_PATH),
        }
    }

    /// Request targets (path and query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(mut stream: TcpStream, routes: &[Route], recorded: &Mutex<Vec<String>>) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
        }
    }

    let request = String::from_utf8_lossy(&buffer);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let path = target.split('?').next().unwrap_or("/").to_string();
    recorded.lock().unwrap().push(target);

    let route = routes
        .iter()
        .find(|route| route.path == path)
        .cloned()
        .unwrap_or_else(|| Route::status("", 404, "{}"));

    let response = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// The fixture tree cut down to its first top-level category.
pub fn bageri_only_tree() -> String {
    let mut tree: CategoryTree = serde_json::from_str(CATEGORY_TREE_JSON).unwrap();
    tree.sub_categories.truncate(1);
    serde_json::to_string(&tree).unwrap()
}
