//! # Simple Email Service Example Tests

mod common;

use aws_doc_examples::provider::ses;
use aws_doc_examples::Console;
use mock_http::aws_error_types;

use common::{mock_with_error, mock_with_fixture};

#[tokio::test]
async fn test_get_template() {
    let (mock, config) = mock_with_fixture("get_template.json").await;
    let mut console = Console::buffered();

    let result = ses::get_template("cpp_test_template", &config, &mut console).await;

    assert!(result);
    assert_eq!(console.stdout_text(), "Successfully got template.\n");
    assert!(console.stderr_text().is_empty());

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/v2/email/templates/cpp_test_template");
}

#[tokio::test]
async fn test_get_template_error() {
    let (_mock, config) = mock_with_error(
        404,
        aws_error_types::NOT_FOUND,
        "Template cpp_test_template does not exist.",
    )
    .await;
    let mut console = Console::buffered();

    let result = ses::get_template("cpp_test_template", &config, &mut console).await;

    assert!(!result);
    assert!(console.stdout_text().is_empty());
    assert_eq!(
        console.stderr_text(),
        "Error getting template. Template cpp_test_template does not exist.\n"
    );
}

#[tokio::test]
async fn test_send_get_template_error_code() {
    let (_mock, config) = mock_with_error(
        404,
        aws_error_types::NOT_FOUND,
        "Template cpp_test_template does not exist.",
    )
    .await;
    let client = ses::client(&config);

    let err = ses::send_get_template(&client, "cpp_test_template")
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some("NotFoundException"));
}

#[tokio::test]
async fn test_create_template_sends_content() {
    let (mock, config) = mock_with_fixture("create_template.json").await;
    let mut console = Console::buffered();
    let content = ses::TemplateContent {
        subject: "Greetings, {{name}}!",
        text: "Dear {{name}}",
        html: None,
    };

    let result = ses::create_template("cpp_test_template", content, &config, &mut console).await;

    assert!(result);
    assert_eq!(
        console.stdout_text(),
        "Successfully created template 'cpp_test_template'.\n"
    );

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/v2/email/templates");
    let body = request.body_json().unwrap();
    assert_eq!(body["TemplateName"], "cpp_test_template");
    assert_eq!(body["TemplateContent"]["Subject"], "Greetings, {{name}}!");
    assert_eq!(body["TemplateContent"]["Text"], "Dear {{name}}");
    assert!(body["TemplateContent"].get("Html").is_none());
}

#[tokio::test]
async fn test_create_template_error() {
    let (_mock, config) = mock_with_error(
        400,
        aws_error_types::ALREADY_EXISTS,
        "Template cpp_test_template already exists.",
    )
    .await;
    let mut console = Console::buffered();
    let content = ses::TemplateContent {
        subject: "Greetings, {{name}}!",
        text: "Dear {{name}}",
        html: None,
    };

    let result = ses::create_template("cpp_test_template", content, &config, &mut console).await;

    assert!(!result);
    assert!(console.stdout_text().is_empty());
    assert_eq!(
        console.stderr_text(),
        "Error: CreateEmailTemplate: Template cpp_test_template already exists.\n"
    );
}

#[tokio::test]
async fn test_delete_template() {
    let (mock, config) = mock_with_fixture("delete_template.json").await;
    let mut console = Console::buffered();

    let result = ses::delete_template("cpp_test_template", &config, &mut console).await;

    assert!(result);
    let request = mock.last_request().unwrap();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/v2/email/templates/cpp_test_template");
}

#[tokio::test]
async fn test_delete_template_error() {
    let (_mock, config) = mock_with_error(
        404,
        aws_error_types::NOT_FOUND,
        "Template cpp_test_template does not exist.",
    )
    .await;
    let mut console = Console::buffered();

    let result = ses::delete_template("cpp_test_template", &config, &mut console).await;

    assert!(!result);
    assert!(console.stdout_text().is_empty());
    assert_eq!(
        console.stderr_text(),
        "Error: DeleteEmailTemplate: Template cpp_test_template does not exist.\n"
    );
}

#[tokio::test]
async fn test_list_templates() {
    let (_mock, config) = mock_with_fixture("list_templates.json").await;
    let mut console = Console::buffered();

    let result = ses::list_templates(&config, &mut console).await;

    assert!(result);
    assert_eq!(
        console.stdout_text(),
        "Found 2 template(s).\n  cpp_test_template\n  receipt\n"
    );
}

#[tokio::test]
async fn test_list_templates_error() {
    let (_mock, config) = mock_with_error(
        400,
        aws_error_types::BAD_REQUEST,
        "PageSize must be between 1 and 100.",
    )
    .await;
    let mut console = Console::buffered();

    let result = ses::list_templates(&config, &mut console).await;

    assert!(!result);
    assert!(console.stdout_text().is_empty());
    assert_eq!(
        console.stderr_text(),
        "Error: ListEmailTemplates: PageSize must be between 1 and 100.\n"
    );
}
