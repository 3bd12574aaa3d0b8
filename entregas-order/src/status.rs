use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Delivery status in the courier lifecycle.
///
/// `Pendente → Coletado → EmTransito → Entregue`, with `Cancelado`
/// reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pendente,
    Coletado,
    EmTransito,
    Entregue,
    Cancelado,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Pendente,
        DeliveryStatus::Coletado,
        DeliveryStatus::EmTransito,
        DeliveryStatus::Entregue,
        DeliveryStatus::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pendente => "pendente",
            DeliveryStatus::Coletado => "coletado",
            DeliveryStatus::EmTransito => "em_transito",
            DeliveryStatus::Entregue => "entregue",
            DeliveryStatus::Cancelado => "cancelado",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Entregue | DeliveryStatus::Cancelado)
    }

    /// Next step on the happy path, if any.
    pub fn next(&self) -> Option<DeliveryStatus> {
        match self {
            DeliveryStatus::Pendente => Some(DeliveryStatus::Coletado),
            DeliveryStatus::Coletado => Some(DeliveryStatus::EmTransito),
            DeliveryStatus::EmTransito => Some(DeliveryStatus::Entregue),
            DeliveryStatus::Entregue | DeliveryStatus::Cancelado => None,
        }
    }

    pub fn can_transition_to(&self, target: DeliveryStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == DeliveryStatus::Cancelado || self.next() == Some(target)
    }

    /// Validates `self → target`.
    pub fn transition_to(&self, target: DeliveryStatus) -> Result<DeliveryStatus, OrderError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(OrderError::InvalidTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        }
    }

    /// Whether the write for this target must also stamp `data_entrega`.
    pub fn stamps_completion(&self) -> bool {
        *self == DeliveryStatus::Entregue
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OrderError::InvalidStatus(s.to_string()))
    }
}

/// Order status as written by the seller dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pendente,
    Processando,
    Enviado,
    Entregue,
    Cancelado,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendente => "pendente",
            OrderStatus::Processando => "processando",
            OrderStatus::Enviado => "enviado",
            OrderStatus::Entregue => "entregue",
            OrderStatus::Cancelado => "cancelado",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: String,
        to: String,
    },
}
