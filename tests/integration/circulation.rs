//! Readers, loans and reservations

use axum::http::{Method, StatusCode};
use biblioteka_client::{
    models::{LoanField, PageQuery, ReaderField, ReservationField, ReservationStatus, SortBy},
    ApiError, Severity,
};
use serde_json::{json, Value};

use crate::helper::MockBackend;

fn reader_json() -> Value {
    json!({
        "@id": "2",
        "id": 3,
        "nomeCompleto": "Ana Souza",
        "cpf": "12345678900",
        "telefone": "11 99999-0000",
        "usuario": { "@id": "3", "id": 30, "email": "ana@example.com" }
    })
}

fn book_json(jsog_id: &str, id: i64) -> Value {
    json!({
        "@id": jsog_id,
        "id": id,
        "titulo": format!("Livro {}", id),
        "isbn": format!("97800000000{:02}", id),
        "totalExemplares": 2,
        "exemplaresDisponiveis": 1
    })
}

#[tokio::test]
async fn get_missing_loan_rejects() {
    let app = MockBackend::new()
        .reply_empty(Method::GET, "/emprestimos/42", StatusCode::NOT_FOUND)
        .spawn()
        .await;

    let result = app.services.loans.get_by_id(42).await;

    match result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, Value::Null);
        }
        other => panic!("expected a 404 error, got {:?}", other),
    }

    let notifications = app.sink.all();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
}

#[tokio::test]
async fn loans_page_with_shared_references() {
    let app = MockBackend::new()
        .reply(
            Method::GET,
            "/leitores/3/emprestimos",
            StatusCode::OK,
            json!({
                "@id": "1",
                "content": [
                    {
                        "@id": "4",
                        "id": 100,
                        "leitor": reader_json(),
                        "livro": book_json("5", 7),
                        "dataEmprestimo": "2024-05-01",
                        "dataPrevistaDevolucao": "2024-05-15",
                        "dataDevolucao": "2024-05-10",
                        "quantidadeRenovacoes": 0,
                        "valorBase": 5,
                        "multa": 0,
                        "valorTotal": 5,
                        "devolvido": true
                    },
                    {
                        "@id": "6",
                        "id": 101,
                        "leitor": { "@ref": "2" },
                        "livro": book_json("7", 8),
                        "dataEmprestimo": "2024-05-20",
                        "dataPrevistaDevolucao": "2024-06-03",
                        "quantidadeRenovacoes": 1,
                        "valorBase": 5,
                        "multa": 2.5,
                        "valorTotal": 7.5,
                        "devolvido": false
                    }
                ],
                "totalElements": 2,
                "pageable": { "@id": "8", "pageNumber": 0 }
            }),
        )
        .spawn()
        .await;

    let query = PageQuery::new(0, 10).sorted(SortBy::asc(LoanField::DueDate));
    let page = app
        .services
        .readers
        .find_search_loans_by_reader_id(&query, None, 3, Some(7), Some(false))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].reader, page.items[1].reader);
    assert_eq!(
        page.items[1].reader.user.as_ref().unwrap().email,
        "ana@example.com"
    );
    assert!(page.items[0].returned && page.items[0].return_date.is_some());
    assert_eq!(page.total_elements(), Some(2));
    assert_eq!(page.pagination["pageable"], json!({ "pageNumber": 0 }));

    let request = app.last_request();
    assert_eq!(request.query["livroId"], "7");
    assert_eq!(request.query["devolvido"], "false");
    assert_eq!(request.query["sort"], "dataPrevistaDevolucao,asc");
}

#[tokio::test]
async fn reservations_filtered_by_status() {
    let app = MockBackend::new()
        .reply(
            Method::GET,
            "/leitores/3/reservas",
            StatusCode::OK,
            json!({
                "content": [{
                    "id": 9,
                    "leitor": reader_json(),
                    "livro": book_json("5", 7),
                    "dataCadastro": "2024-05-01",
                    "dataVencimento": "2024-05-08",
                    "quantidadeRenovacoes": 0,
                    "status": "ATIVA"
                }],
                "totalElements": 1
            }),
        )
        .spawn()
        .await;

    let query: PageQuery<ReservationField> = PageQuery::default();
    let page = app
        .services
        .readers
        .find_search_reservations_by_reader_id(
            &query,
            Some("Livro"),
            3,
            Some(ReservationStatus::Ativa),
        )
        .await
        .unwrap();

    assert_eq!(page.items[0].status, ReservationStatus::Ativa);
    assert!(page.items[0].status.is_open());

    let request = app.last_request();
    assert_eq!(request.path, "/leitores/3/reservas");
    assert_eq!(request.query["status"], "ATIVA");
    assert_eq!(request.query["search"], "Livro");
    assert_eq!(request.query["sort"], "id,desc");
}

#[tokio::test]
async fn lend_posts_query_parameters() {
    let app = MockBackend::new()
        .reply(
            Method::POST,
            "/emprestimos/emprestar",
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "userMessage": "Senha inválida" }),
        )
        .spawn()
        .await;

    let err = app.services.loans.lend(3, 7, "segredo").await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(err.user_message().as_deref(), Some("Senha inválida"));

    let request = app.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.query["leitorId"], "3");
    assert_eq!(request.query["livroId"], "7");
    assert_eq!(request.query["senha"], "segredo");
    assert!(request.body.is_none());
    assert_eq!(app.sink.count(Severity::Error), 1);
    assert_eq!(app.sink.count(Severity::Success), 0);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let app = MockBackend::new()
        .reply(Method::GET, "/leitores/buscar", StatusCode::OK, json!({ "content": [] }))
        .reply_empty(Method::DELETE, "/leitores/3", StatusCode::NO_CONTENT)
        .spawn()
        .await;

    let query: PageQuery<ReaderField> = PageQuery::default();
    let (listed, deleted) = tokio::join!(
        app.services.readers.find_search(&query, None),
        app.services.readers.delete(3),
    );

    assert!(listed.unwrap().items.is_empty());
    assert!(deleted.unwrap().is_none());
    assert_eq!(app.requests().len(), 2);
    assert_eq!(app.sink.count(Severity::Success), 1);
}
