//! Tests for cliente HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::ClienteService;
use crate::domain::ports::{MockClienteCommand, MockClienteQuery};
use crate::outbound::memory::InMemoryClienteRepository;
use crate::test_support::{fixture_clock, fixture_date};

#[fixture]
fn memory_state() -> HttpState {
    HttpState::from_service(ClienteService::new(
        Arc::new(InMemoryClienteRepository::new()),
        fixture_clock(),
    ))
}

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api").configure(configure))
}

fn ada() -> Value {
    json!({
        "nombre": "Ada Byron",
        "apellido": "Lovelace",
        "email": "ada@example.com"
    })
}

fn errors_of(body: &Value) -> Vec<&str> {
    body.get("errors")
        .and_then(Value::as_array)
        .expect("errors array")
        .iter()
        .filter_map(Value::as_str)
        .collect()
}

async fn send(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

fn post_json(payload: &Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/clientes")
        .set_json(payload)
}

#[rstest]
#[actix_web::test]
async fn create_stamps_the_server_date(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let mut payload = ada();
    payload["createdAt"] = json!("1999-01-01");
    payload["id"] = json!(77);

    let (status, body) = send(&app, post_json(&payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensaje"], "El cliente ha sido creado con éxito");
    assert_eq!(body["cliente"]["id"], 1);
    assert_eq!(body["cliente"]["nombre"], "Ada Byron");
    assert_eq!(
        body["cliente"]["createdAt"],
        json!(fixture_date().format("%Y-%m-%d").to_string())
    );
}

#[rstest]
#[actix_web::test]
async fn create_reports_every_invalid_field(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let payload = json!({ "nombre": "Al", "apellido": "", "email": "not-an-email" });

    let (status, body) = send(&app, post_json(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors_of(&body),
        [
            "El campo 'nombre' el tamaño tiene que estar entre 4 y 12",
            "El campo 'apellido' no puede estar vacío",
            "El campo 'email' no es una dirección de correo válida",
        ]
    );
}

#[rstest]
#[actix_web::test]
async fn create_without_body_fails_every_required_field(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;

    let (status, body) = send(&app, actix_test::TestRequest::post().uri("/api/clientes")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors_of(&body).len(), 3);
    assert!(
        errors_of(&body)
            .iter()
            .all(|message| message.ends_with("no puede estar vacío"))
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_bad_request(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/clientes")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"nombre\": ");

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = errors_of(&body);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("El cuerpo de la petición no es válido: "));
}

#[rstest]
#[actix_web::test]
async fn unknown_id_is_not_found(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/clientes/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "mensaje": "El cliente ID: 999 no existe" }));
}

#[rstest]
#[case("/api/clientes/abc")]
#[case("/api/clientes/page/-1")]
#[actix_web::test]
async fn non_numeric_path_segments_are_rejected(memory_state: HttpState, #[case] uri: &str) {
    let app = actix_test::init_service(test_app(memory_state)).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(errors_of(&body)[0].starts_with("El parámetro de ruta no es válido: "));
}

#[rstest]
#[actix_web::test]
async fn created_cliente_can_be_read_back(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    let (_, created) = send(&app, post_json(&ada())).await;

    let (status, fetched) = send(&app, actix_test::TestRequest::get().uri("/api/clientes/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created["cliente"]);
}

#[rstest]
#[actix_web::test]
async fn null_update_is_not_found_but_valid_update_of_unknown_id_fails(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    send(&app, post_json(&ada())).await;

    let null_update = actix_test::TestRequest::put()
        .uri("/api/clientes/1")
        .insert_header(("content-type", "application/json"))
        .set_payload("null");
    let (status, body) = send(&app, null_update).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["mensaje"], "El cliente ID: 1 no existe");

    let ghost_update = actix_test::TestRequest::put()
        .uri("/api/clientes/42")
        .set_json(ada());
    let (status, body) = send(&app, ghost_update).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["mensaje"], "Error al realizar la actualización");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|error| error.ends_with(" : record not found"))
    );
}

#[rstest]
#[actix_web::test]
async fn update_overwrites_fields_and_date(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    send(&app, post_json(&ada())).await;
    let payload = json!({
        "nombre": "Augusta",
        "apellido": "King",
        "email": "augusta@example.com",
        "createdAt": "2018-01-01"
    });

    let request = actix_test::TestRequest::put()
        .uri("/api/clientes/1")
        .set_json(&payload);
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensaje"], "El cliente ha sido actualizado con éxito");
    assert_eq!(body["cliente"]["id"], 1);
    assert_eq!(body["cliente"]["nombre"], "Augusta");
    assert_eq!(body["cliente"]["createdAt"], "2018-01-01");
}

#[rstest]
#[actix_web::test]
async fn update_validates_payload(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    send(&app, post_json(&ada())).await;

    let request = actix_test::TestRequest::put()
        .uri("/api/clientes/1")
        .set_json(json!({ "nombre": "Ada Byron", "apellido": "Lovelace" }));
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors_of(&body), ["El campo 'email' no puede estar vacío"]);
}

#[rstest]
#[actix_web::test]
async fn deleting_twice_succeeds(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    send(&app, post_json(&ada())).await;

    for _ in 0..2 {
        let (status, body) =
            send(&app, actix_test::TestRequest::delete().uri("/api/clientes/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "mensaje": "El cliente ha sido eliminado con éxito" }));
    }

    let (status, _) = send(&app, actix_test::TestRequest::get().uri("/api/clientes/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case(0, 4, true, false)]
#[case(2, 2, false, true)]
#[case(3, 0, false, true)]
#[actix_web::test]
async fn pages_hold_four_clientes(
    memory_state: HttpState,
    #[case] page: u32,
    #[case] expected: usize,
    #[case] first: bool,
    #[case] last: bool,
) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    for n in 0..10 {
        let payload = json!({
            "nombre": format!("Cliente{n}"),
            "apellido": "Prueba",
            "email": format!("cliente{n}@example.com")
        });
        let (status, _) = send(&app, post_json(&payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let uri = format!("/api/clientes/page/{page}");
    let (status, body) = send(&app, actix_test::TestRequest::get().uri(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"].as_array().map(Vec::len), Some(expected));
    assert_eq!(body["totalElements"], 10);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["size"], 4);
    assert_eq!(body["number"], page);
    assert_eq!(body["first"], first);
    assert_eq!(body["last"], last);
    assert_eq!(body["empty"], expected == 0);
}

#[rstest]
#[actix_web::test]
async fn list_returns_clientes_in_id_order(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    send(&app, post_json(&ada())).await;
    send(
        &app,
        post_json(&json!({
            "nombre": "Grace",
            "apellido": "Hopper",
            "email": "grace@example.com"
        })),
    )
    .await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/api/clientes")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|cliente| cliente["id"].as_i64())
        .collect();
    assert_eq!(ids, [1, 2]);
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_fails_as_creation_error(memory_state: HttpState) {
    let app = actix_test::init_service(test_app(memory_state)).await;
    send(&app, post_json(&ada())).await;

    let (status, body) = send(&app, post_json(&ada())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["mensaje"], "Error al realizar la creación");
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|error| error.contains("clientes_email_key"))
    );
}

fn failing_state() -> HttpState {
    let mut query = MockClienteQuery::new();
    query.expect_find_all().returning(|| {
        Err(DataAccessError::connection(
            "could not open a database connection",
            "connection refused",
        ))
    });
    query
        .expect_find_page()
        .returning(|_| Err(DataAccessError::statement("could not execute statement", "boom")));
    query
        .expect_find_by_id()
        .returning(|_| Err(DataAccessError::connection("down", "refused")));
    let mut command = MockClienteCommand::new();
    command
        .expect_delete()
        .returning(|_| Err(DataAccessError::connection("pool closed", "shutting down")));
    HttpState::new(Arc::new(query), Arc::new(command))
}

#[rstest]
#[case("/api/clientes", "could not open a database connection : connection refused")]
#[case("/api/clientes/page/0", "could not execute statement : boom")]
#[actix_web::test]
async fn list_failures_are_query_errors(#[case] uri: &str, #[case] diagnostic: &str) {
    let app = actix_test::init_service(test_app(failing_state())).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "mensaje": "Error al realizar la consulta", "error": diagnostic })
    );
}

#[rstest]
#[case::get(actix_test::TestRequest::get(), "Error al realizar la consulta")]
#[case::update(
    actix_test::TestRequest::put().set_json(ada()),
    "Error al realizar la actualización"
)]
#[actix_web::test]
async fn lookup_failures_follow_the_operation(
    #[case] request: actix_test::TestRequest,
    #[case] mensaje: &str,
) {
    let app = actix_test::init_service(test_app(failing_state())).await;

    let (status, body) = send(&app, request.uri("/api/clientes/5")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "mensaje": mensaje, "error": "down : refused" }));
}

#[rstest]
#[actix_web::test]
async fn delete_failure_is_a_deletion_error() {
    let app = actix_test::init_service(test_app(failing_state())).await;

    let (status, body) = send(&app, actix_test::TestRequest::delete().uri("/api/clientes/3")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "mensaje": "Error al realizar la eliminación",
            "error": "pool closed : shutting down"
        })
    );
}

#[rstest]
#[case(b"".as_slice(), true)]
#[case(b"  \n".as_slice(), true)]
#[case(b"null".as_slice(), true)]
#[case(b"{}".as_slice(), false)]
fn decode_body_treats_blank_and_null_as_absent(#[case] body: &[u8], #[case] absent: bool) {
    let decoded = decode_body(body).expect("decodes");
    assert_eq!(decoded.is_none(), absent);
}
