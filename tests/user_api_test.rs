// ==========================================
// 用户订单管理控制台 - UserApi 集成测试
// ==========================================
// 走完整 HTTP 链路（进程内 mock 后端）
// ==========================================


use user_order_console::api::ApiError;
use user_order_console::domain::UserUpdate;

use test_helpers::start_mock_backend;

#[tokio::test]
async fn test_hello_probe() {
    let backend = start_mock_backend().await;
    let resp = backend.client().hello().await.unwrap();
    assert_eq!(resp.message, "Backend is running");
}

#[tokio::test]
async fn test_create_normalizes_and_lists() {
    let backend = start_mock_backend().await;
    let api = backend.user_api();

    // 表单同款归一化: name 去空白，email 去空白转小写
    let user = api.create("  Ana García  ", " ANA@Ejemplo.COM ").await.unwrap();
    assert_eq!(user.name, "Ana García");
    assert_eq!(user.email, "ana@ejemplo.com");
    assert_eq!(user.order_count, 0);

    let list = api.list(1, 10, None).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.users.len(), 1);
    assert_eq!(list.users[0].id, user.id);
}

#[tokio::test]
async fn test_create_duplicate_email_surfaces_server_message() {
    let backend = start_mock_backend().await;
    let api = backend.user_api();

    api.create("Ana", "ana@x.com").await.unwrap();
    let err = api.create("Otra", "ana@x.com").await.unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email already exists");
        }
        other => panic!("意外的错误类型: {:?}", other),
    }
}

#[tokio::test]
async fn test_client_side_pagination_validation_blocks_request() {
    let backend = start_mock_backend().await;
    let api = backend.user_api();

    assert!(matches!(
        api.list(0, 10, None).await.unwrap_err(),
        ApiError::InvalidInput(_)
    ));
    assert!(matches!(
        api.list(1, 101, None).await.unwrap_err(),
        ApiError::InvalidInput(_)
    ));
}

#[tokio::test]
async fn test_list_pagination_and_search() {
    let backend = start_mock_backend().await;
    for i in 0..25 {
        backend.seed_user(&format!("Usuario {}", i), &format!("u{}@x.com", i));
    }
    backend.seed_user("Carlos Lopez", "carlos@ejemplo.com");

    let api = backend.user_api();

    let page2 = api.list(2, 10, None).await.unwrap();
    assert_eq!(page2.total, 26);
    assert_eq!(page2.users.len(), 10);
    assert_eq!(page2.page, 2);
    assert_eq!(page2.total_pages, 3);

    // 搜索: name/email 模糊匹配，搜索词回显
    let found = api.list(1, 10, Some("carlos")).await.unwrap();
    assert_eq!(found.total, 1);
    assert_eq!(found.users[0].email, "carlos@ejemplo.com");
    assert_eq!(found.search.as_deref(), Some("carlos"));
}

#[tokio::test]
async fn test_update_user_partial_fields() {
    let backend = start_mock_backend().await;
    let id = backend.seed_user("Ana", "ana@x.com");
    let api = backend.user_api();

    let updated = api
        .update(id, &UserUpdate::default().name("Ana María"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Ana María");
    assert_eq!(updated.email, "ana@x.com");

    // 空更新在客户端即被拦截
    assert!(matches!(
        api.update(id, &UserUpdate::default()).await.unwrap_err(),
        ApiError::InvalidInput(_)
    ));

    // 不存在的用户 → NotFound
    assert!(matches!(
        api.update(9999, &UserUpdate::default().name("x"))
            .await
            .unwrap_err(),
        ApiError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_delete_user_refused_with_existing_orders() {
    let backend = start_mock_backend().await;
    let id = backend.seed_user("Ana", "ana@x.com");
    backend.seed_order(id, "Laptop", 2.0);

    let api = backend.user_api();
    let err = api.delete(id).await.unwrap_err();
    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Cannot delete user with existing orders");
        }
        other => panic!("意外的错误类型: {:?}", other),
    }

    // 无订单用户可删除
    let free_id = backend.seed_user("Luis", "luis@x.com");
    let resp = api.delete(free_id).await.unwrap();
    assert!(resp.success);
    assert!(resp.message.contains("Luis"));
}

#[tokio::test]
async fn test_get_user_orders() {
    let backend = start_mock_backend().await;
    let id = backend.seed_user("Ana", "ana@x.com");
    backend.seed_order(id, "Laptop", 2.0);
    backend.seed_order(id, "Mouse", 5.0);

    let api = backend.user_api();
    let resp = api.get_orders(id).await.unwrap();
    assert_eq!(resp.user.id, id);
    assert_eq!(resp.total_orders, 2);
    assert_eq!(resp.orders.len(), 2);
    assert!(resp.orders.iter().all(|o| o.user_id == id));
}

#[tokio::test]
async fn test_export_users_payload() {
    let backend = start_mock_backend().await;
    backend.seed_user("Ana", "ana@x.com");
    backend.seed_user("Luis", "luis@x.com");

    let resp = backend.user_api().export().await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.total, 2);
    assert_eq!(resp.users.len(), 2);
    assert!(!resp.exported_at.is_empty());
}

#[tokio::test]
async fn test_transport_error_when_backend_unreachable() {
    // 未监听的端口 → 传输层错误（而非服务端错误）
    let api = user_order_console::api::UserApi::new(std::sync::Arc::new(
        user_order_console::api::ApiClient::with_base_url("http://127.0.0.1:9/api", 1).unwrap(),
    ));
    let err = api.list(1, 10, None).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
