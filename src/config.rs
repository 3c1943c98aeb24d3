//! Configuração do Nexus carregada a partir de `nexus.toml`.
//!
//! A struct [`NexusConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis. As variáveis
//! de ambiente `NEXUS_ACCESS_TOKEN`, `NEXUS_API_KEY` e `OPENAI_API_KEY`
//! têm precedência sobre o arquivo.

use std::path::Path;

use serde::Deserialize;

use crate::error::NexusError;

/// Configuração de nível superior carregada de `nexus.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NexusConfig {
    /// URL base do backend de persistência.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Chave pública (anon) da API do backend.
    #[serde(default)]
    pub api_key: String,

    /// Token da sessão do usuário; vazio significa deslogado.
    #[serde(default)]
    pub access_token: String,

    /// URL do endpoint de completions do assistente.
    #[serde(default = "default_assistant_url")]
    pub assistant_url: String,

    /// Chave da API do assistente.
    #[serde(default)]
    pub assistant_api_key: String,

    /// Modelo hospedado usado pelo assistente.
    #[serde(default = "default_assistant_model")]
    pub assistant_model: String,

    /// Limite de registros por listagem.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

// Porta padrão do backend de desenvolvimento local.
fn default_backend_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_assistant_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_assistant_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_list_limit() -> u32 {
    100
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            api_key: String::new(),
            access_token: String::new(),
            assistant_url: default_assistant_url(),
            assistant_api_key: String::new(),
            assistant_model: default_assistant_model(),
            list_limit: default_list_limit(),
        }
    }
}

impl NexusConfig {
    /// Carrega a configuração de `nexus.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self, NexusError> {
        Self::load_from(Path::new("nexus.toml"))
    }

    /// Carrega a configuração de um caminho específico.
    pub fn load_from(path: &Path) -> Result<Self, NexusError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<NexusConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variáveis de ambiente têm precedência sobre o arquivo.
        if let Ok(token) = std::env::var("NEXUS_ACCESS_TOKEN")
            && !token.is_empty()
        {
            config.access_token = token;
        }
        if let Ok(key) = std::env::var("NEXUS_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            config.assistant_api_key = key;
        }

        Ok(config)
    }

    /// Token de sessão como opção: vazio vira `None`.
    pub fn session_token(&self) -> Option<String> {
        if self.access_token.is_empty() {
            None
        } else {
            Some(self.access_token.clone())
        }
    }
}
