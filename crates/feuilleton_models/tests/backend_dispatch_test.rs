use feuilleton_interface::FeuilletonDriver;
use feuilleton_models::{AiServiceConfig, AnyDriver, BackendKind, OllamaConfig, OpenAiConfig};

fn openai_settings() -> OpenAiConfig {
    OpenAiConfig {
        base_url: "https://api.openai.com".to_string(),
        api_key: "sk-test".to_string(),
        model: "gpt-4o-mini".to_string(),
        temperature: 0.7,
        max_tokens: 2000,
    }
}

fn ollama_settings() -> OllamaConfig {
    OllamaConfig {
        base_url: "http://localhost:11434".to_string(),
        model: "qwen2.5".to_string(),
        temperature: 0.5,
    }
}

#[test]
fn backend_kind_parses_known_identifiers() {
    assert_eq!(BackendKind::parse("openai"), Some(BackendKind::OpenAi));
    assert_eq!(BackendKind::parse("OpenAI"), Some(BackendKind::OpenAi));
    assert_eq!(BackendKind::parse("ollama"), Some(BackendKind::Ollama));
    assert_eq!(BackendKind::parse("anthropic"), None);
    assert_eq!(BackendKind::parse(""), None);
}

#[test]
fn unknown_provider_fails_fast_with_its_name() {
    let config = AiServiceConfig {
        provider: "deepmind".to_string(),
        openai: Some(openai_settings()),
        ollama: None,
    };

    let err = AnyDriver::from_config(&config).unwrap_err();
    assert!(format!("{}", err).contains("deepmind"));
}

#[test]
fn missing_backend_section_is_a_config_error() {
    let config = AiServiceConfig {
        provider: "ollama".to_string(),
        openai: Some(openai_settings()),
        ollama: None,
    };

    let err = AnyDriver::from_config(&config).unwrap_err();
    assert!(format!("{}", err).contains("ollama section is missing"));
}

#[test]
fn selected_driver_reports_provider_and_model() {
    let config = AiServiceConfig {
        provider: "openai".to_string(),
        openai: Some(openai_settings()),
        ollama: None,
    };
    let driver = AnyDriver::from_config(&config).unwrap();
    assert_eq!(driver.provider_name(), "openai");
    assert_eq!(driver.model_name(), "gpt-4o-mini");

    let config = AiServiceConfig {
        provider: "ollama".to_string(),
        openai: None,
        ollama: Some(ollama_settings()),
    };
    let driver = AnyDriver::from_config(&config).unwrap();
    assert_eq!(driver.provider_name(), "ollama");
    assert_eq!(driver.model_name(), "qwen2.5");
}
