//! Tipos de erro para o cliente do assistente de pesquisa.
//!
//! Define [`AssistantError`] com variantes para erros da API de completions
//! e falhas de rede. Como em todo o restante do tracker, não há retry: cada
//! requisição é independente e a falha é reduzida a uma notificação.

use thiserror::Error;

/// Erros que podem ocorrer ao consultar o assistente.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Erro retornado pelo endpoint de completions (4xx/5xx).
    /// Contém o código de status HTTP e a mensagem do payload de erro.
    #[error("assistant error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Resposta 2xx com corpo fora do formato esperado (ex.: sem escolhas).
    #[error("unexpected completion payload: {0}")]
    Payload(String),
}
