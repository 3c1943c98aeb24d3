//! Tipos de dados para requisições e respostas do assistente de pesquisa.
//!
//! [`AssistRequest`]/[`AssistResponse`] são a interface do assistente
//! dentro do tracker; os tipos `Chat*` seguem o formato JSON do endpoint
//! de chat completions consumido por baixo. Todas as structs derivam
//! `Serialize`/`Deserialize` conforme o esperado pela API.

use serde::{Deserialize, Serialize};

use super::prompt::RequestType;

/// Uma consulta ao assistente sobre um objetivo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistRequest {
    /// Título do objetivo em questão.
    #[serde(rename = "objectiveTitle")]
    pub objective_title: String,
    /// Descrição opcional, incluída no prompt quando presente.
    #[serde(rename = "objectiveDescription", skip_serializing_if = "Option::is_none")]
    pub objective_description: Option<String>,
    /// Qual dos cinco tipos de consulta executar.
    #[serde(rename = "requestType")]
    pub request_type: RequestType,
}

/// Resposta do assistente: o texto do modelo, sem pós-processamento.
///
/// O texto vem como pseudo-bullets delimitados por quebras de linha e é
/// repassado ao chamador sem modificação.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistResponse {
    pub result: String,
}

/// Payload de erro retornado pelo endpoint em respostas não-2xx.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistErrorBody {
    pub error: String,
}

/// Corpo da requisição para o endpoint de chat completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Identificador do modelo hospedado (ex.: "gpt-4o-mini").
    pub model: String,
    /// Mensagens de sistema e de usuário que compõem a conversa.
    pub messages: Vec<ChatMessage>,
}

/// Uma única mensagem na conversa com o modelo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Papel do remetente: "system" ou "user".
    pub role: String,
    /// Conteúdo textual da mensagem.
    pub content: String,
}

/// Resposta do endpoint de chat completions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Alternativas geradas; a primeira é usada.
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assist_request_uses_wire_field_names() {
        let req = AssistRequest {
            objective_title: "Launch v1".into(),
            objective_description: Some("Ship the first version".into()),
            request_type: RequestType::Suggestions,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""objectiveTitle""#));
        assert!(json.contains(r#""objectiveDescription""#));
        assert!(json.contains(r#""requestType":"suggestions""#));
        assert!(!json.contains("objective_title"));
    }

    #[test]
    fn assist_request_omits_missing_description() {
        let req = AssistRequest {
            objective_title: "Launch v1".into(),
            objective_description: None,
            request_type: RequestType::Timeline,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("objectiveDescription"));
    }

    #[test]
    fn assist_response_roundtrip() {
        let resp: AssistResponse =
            serde_json::from_str(r#"{"result": "- do the thing\n- then the other"}"#).unwrap();
        assert!(resp.result.starts_with("- do the thing"));
        let json = serde_json::to_string(&resp).unwrap();
        let parsed: AssistResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result, resp.result);
    }

    #[test]
    fn chat_response_deserialize_from_api_format() {
        let api_json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "• First insight"}}
            ]
        }"#;
        let resp: ChatResponse = serde_json::from_str(api_json).unwrap();
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(resp.choices[0].message.content, "• First insight");
    }

    #[test]
    fn chat_response_tolerates_empty_choices() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(resp.choices.is_empty());
    }

    #[test]
    fn error_body_parses_endpoint_payload() {
        let body: AssistErrorBody =
            serde_json::from_str(r#"{"error": "model overloaded"}"#).unwrap();
        assert_eq!(body.error, "model overloaded");
    }
}
