//! Mensagens e conversões de erro

use candidato_status_rust::error::StatusError;

#[test]
fn test_display_config() {
    let erro = StatusError::Config("nenhuma fonte configurada".into());
    assert_eq!(
        erro.to_string(),
        "Erro de configuração: nenhuma fonte configurada"
    );
}

#[test]
fn test_display_download_inclui_status_e_url() {
    let erro = StatusError::Download {
        status: 403,
        url: "https://drive.google.com/uc?export=download&id=abc".into(),
    };
    let texto = erro.to_string();
    assert!(texto.contains("403"));
    assert!(texto.contains("drive.google.com"));
}

#[test]
fn test_display_planilha() {
    let erro = StatusError::Planilha("arquivo xlsx inválido".into());
    assert!(erro.to_string().contains("planilha Excel"));
}

#[test]
fn test_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "arquivo não existe");
    let erro: StatusError = io.into();
    assert!(matches!(erro, StatusError::Io(_)));
    assert!(erro.to_string().contains("arquivo não existe"));
}

#[test]
fn test_from_json() {
    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let erro: StatusError = json.into();
    assert!(matches!(erro, StatusError::JsonParse(_)));
}

#[test]
fn test_senha_ausente_cita_a_variavel() {
    assert!(StatusError::SenhaAusente
        .to_string()
        .contains("SHAREPOINT_SENHA"));
}
