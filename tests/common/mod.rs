//! In-process stand-in for the ticket-tracker REST backend.
#![allow(dead_code)]

use std::cmp::Ordering;
use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use ticket_tracker::list::StaleResponsePolicy;
use ticket_tracker::models::config::ClientConfig;

pub const APP_NAME: &str = "ticketTrackerApp";

#[derive(Default)]
pub struct Backend {
    pub tickets: Mutex<Vec<Value>>,
    pub categories: Mutex<Vec<Value>>,
    /// Query strings of every ticket list request, in arrival order.
    pub list_queries: Mutex<Vec<String>>,
    next_id: Mutex<i64>,
}

impl Backend {
    pub fn with_tickets(count: i64) -> Self {
        let backend = Backend::default();
        {
            let mut tickets = backend.tickets.lock().unwrap();
            for id in 1..=count {
                tickets.push(json!({
                    "id": id,
                    "title": format!("Ticket {id:02}"),
                    "description": "Seeded ticket used by the integration tests",
                    "creationDate": "2024-01-01T00:00:00Z",
                    "status": if id % 2 == 0 { "CLOSED" } else { "OPEN" },
                    "category": {"id": 1, "name": "Hardware"},
                    "priority": {"id": 2, "name": "HIGH"},
                    "user": {"id": 1, "login": "admin"}
                }));
            }
        }
        *backend.next_id.lock().unwrap() = count + 1;
        *backend.categories.lock().unwrap() = vec![
            json!({"id": 1, "name": "Hardware"}),
            json!({"id": 2, "name": "Network"}),
        ];
        backend
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.lock().unwrap().len()
    }
}

#[derive(Deserialize)]
struct ListParams {
    page: Option<usize>,
    size: Option<usize>,
    sort: Option<String>,
}

fn alert_header(suffix: &str) -> String {
    format!("X-{APP_NAME}-{suffix}")
}

fn problem(status: u16, title: &str) -> Value {
    json!({"type": "about:blank", "title": title, "status": status})
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Expands `{ "id": n }` references the way the backend resolves relations.
fn resolve(mut ticket: Value) -> Value {
    for (key, label) in [("category", "name"), ("priority", "name"), ("user", "login")] {
        if let Some(id) = ticket.get(key).and_then(|r| r.get("id")).and_then(Value::as_i64) {
            let mut reference = Map::new();
            reference.insert("id".to_string(), json!(id));
            reference.insert(label.to_string(), json!(format!("{key}-{id}")));
            ticket[key] = Value::Object(reference);
        }
    }
    ticket
}

async fn list_tickets(
    backend: web::Data<Backend>,
    req: HttpRequest,
    params: web::Query<ListParams>,
) -> HttpResponse {
    backend
        .list_queries
        .lock()
        .unwrap()
        .push(req.query_string().to_string());

    let mut tickets = backend.tickets.lock().unwrap().clone();
    let sort = params.sort.clone().unwrap_or_else(|| "id,asc".to_string());
    let (field, order) = sort.split_once(',').unwrap_or((sort.as_str(), "asc"));
    tickets.sort_by(|a, b| compare(&a[field], &b[field]));
    if order == "desc" {
        tickets.reverse();
    }

    let total = tickets.len();
    let size = params.size.unwrap_or(20);
    let page = params.page.unwrap_or(0);
    let items: Vec<Value> = tickets.into_iter().skip(page * size).take(size).collect();

    HttpResponse::Ok()
        .insert_header(("X-Total-Count", total.to_string()))
        .json(items)
}

async fn get_ticket(backend: web::Data<Backend>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    let tickets = backend.tickets.lock().unwrap();
    match tickets.iter().find(|t| t["id"] == json!(id)) {
        Some(ticket) => HttpResponse::Ok().json(ticket),
        None => HttpResponse::NotFound().json(problem(404, "Not Found")),
    }
}

async fn create_ticket(backend: web::Data<Backend>, body: web::Json<Value>) -> HttpResponse {
    let mut ticket = body.into_inner();
    if ticket.get("id").is_some_and(|id| !id.is_null()) {
        return HttpResponse::BadRequest()
            .insert_header((alert_header("error"), "error.idexists"))
            .json(json!({
                "title": "A new ticket cannot already have an ID",
                "status": 400
            }));
    }

    let id = {
        let mut next = backend.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    };
    ticket["id"] = json!(id);
    if ticket.get("status").is_none_or(Value::is_null) {
        ticket["status"] = json!("OPEN");
    }
    if ticket.get("creationDate").is_none_or(Value::is_null) {
        ticket["creationDate"] = json!("2024-02-02T12:00:00Z");
    }
    let ticket = resolve(ticket);
    backend.tickets.lock().unwrap().push(ticket.clone());

    HttpResponse::Created()
        .insert_header((alert_header("alert"), format!("{APP_NAME}.ticket.created")))
        .insert_header((alert_header("params"), id.to_string()))
        .json(ticket)
}

async fn update_ticket(backend: web::Data<Backend>, body: web::Json<Value>) -> HttpResponse {
    let ticket = body.into_inner();
    let Some(id) = ticket.get("id").and_then(Value::as_i64) else {
        return HttpResponse::BadRequest()
            .insert_header((alert_header("error"), "error.idnull"))
            .json(json!({"title": "Bad Request", "detail": "Invalid id", "status": 400}));
    };

    let mut tickets = backend.tickets.lock().unwrap();
    let Some(stored) = tickets.iter_mut().find(|t| t["id"] == json!(id)) else {
        return HttpResponse::NotFound().json(problem(404, "Entity not found"));
    };
    *stored = resolve(ticket);

    HttpResponse::Ok()
        .insert_header((alert_header("alert"), format!("{APP_NAME}.ticket.updated")))
        .insert_header((alert_header("params"), id.to_string()))
        .json(stored.clone())
}

async fn patch_ticket(
    backend: web::Data<Backend>,
    req: HttpRequest,
    id: web::Path<i64>,
    body: web::Bytes,
) -> HttpResponse {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if content_type != "application/merge-patch+json" {
        return HttpResponse::UnsupportedMediaType().json(problem(415, "Unsupported Media Type"));
    }
    let Ok(Value::Object(changes)) = serde_json::from_slice::<Value>(&body) else {
        return HttpResponse::BadRequest().json(problem(400, "Bad Request"));
    };

    let id = id.into_inner();
    let mut tickets = backend.tickets.lock().unwrap();
    let Some(stored) = tickets.iter_mut().find(|t| t["id"] == json!(id)) else {
        return HttpResponse::NotFound().json(problem(404, "Entity not found"));
    };
    for (key, value) in changes {
        stored[key] = value;
    }

    HttpResponse::Ok()
        .insert_header((alert_header("alert"), format!("{APP_NAME}.ticket.updated")))
        .insert_header((alert_header("params"), id.to_string()))
        .json(stored.clone())
}

async fn delete_ticket(backend: web::Data<Backend>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    backend
        .tickets
        .lock()
        .unwrap()
        .retain(|t| t["id"] != json!(id));

    HttpResponse::NoContent()
        .insert_header((alert_header("alert"), format!("{APP_NAME}.ticket.deleted")))
        .insert_header((alert_header("params"), id.to_string()))
        .finish()
}

async fn list_categories(backend: web::Data<Backend>) -> HttpResponse {
    HttpResponse::Ok().json(backend.categories.lock().unwrap().clone())
}

async fn list_users() -> HttpResponse {
    HttpResponse::InternalServerError()
        .insert_header((alert_header("error"), "error.http.500"))
        .finish()
}

pub struct TestServer {
    pub base_url: String,
    handle: ServerHandle,
}

impl TestServer {
    pub async fn start(backend: web::Data<Backend>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let port = listener.local_addr().expect("listener address").port();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(backend.clone())
                .route("/api/tickets", web::get().to(list_tickets))
                .route("/api/tickets", web::post().to(create_ticket))
                .route("/api/tickets", web::put().to(update_ticket))
                .route("/api/tickets/{id}", web::get().to(get_ticket))
                .route("/api/tickets/{id}", web::patch().to(patch_ticket))
                .route("/api/tickets/{id}", web::delete().to(delete_ticket))
                .route("/api/ticket-categories", web::get().to(list_categories))
                .route("/api/users", web::get().to(list_users))
        })
        .workers(1)
        .listen(listener)
        .expect("listen on test port")
        .run();

        let handle = server.handle();
        tokio::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.base_url.clone(),
            app_name: APP_NAME.to_string(),
            items_per_page: 20,
            stale_responses: StaleResponsePolicy::Discard,
            request_timeout_secs: Some(5),
        }
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
