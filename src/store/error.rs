//! Tipos de erro para o cliente do backend de persistência.
//!
//! Define [`StoreError`] com variantes para sessão ausente, registro não
//! encontrado, erros da API e falhas de rede. Usa `thiserror` para derivar
//! `Display` e `Error` a partir dos atributos `#[error(...)]`.

use thiserror::Error;

/// Erros que podem ocorrer ao interagir com o backend de persistência.
///
/// As variantes cobrem os cenários de falha observados:
/// - [`MissingSession`](StoreError::MissingSession) — escrita sem sessão autenticada
/// - [`NotFound`](StoreError::NotFound) — consulta por id sem resultado
/// - [`ApiError`](StoreError::ApiError) — qualquer erro HTTP (4xx/5xx)
/// - [`NetworkError`](StoreError::NetworkError) — falha na camada de rede
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nenhuma sessão ativa. Escritas exigem um usuário autenticado e são
    /// abortadas antes de qualquer mutação.
    #[error("no active session; sign in before creating or editing records")]
    MissingSession,

    /// A consulta por id não retornou nenhum registro.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Erro retornado pelo backend (ex.: 401 token inválido, 500 erro interno).
    /// Contém o código de status HTTP e a mensagem do corpo da resposta.
    #[error("backend error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Falha de rede subjacente (DNS, conexão recusada, timeout).
    /// Encapsula o erro original do `reqwest` via `#[from]`.
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// O backend respondeu 2xx com um corpo fora do formato esperado.
    #[error("unexpected backend payload: {0}")]
    Payload(String),
}
