//! JSON wire representation of IR trees and evaluation reports.
//!
//! DTO-to-domain conversion is the construction boundary: malformed trees
//! are rejected here and never reach a core algorithm.

use crate::domain::error::MalformedTree;
use crate::domain::ir::{CatchHandler, IrNode};
use crate::domain::metrics::UnitScores;
use serde::{Deserialize, Serialize};

/// One IR node as it appears on the wire, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeDto {
    Call {
        identifier: String,
    },
    VarDecl {
        name: String,
        ty: String,
    },
    Sequence {
        children: Vec<TreeDto>,
    },
    Branch {
        then_body: Box<TreeDto>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_body: Option<Box<TreeDto>>,
    },
    Loop {
        body: Box<TreeDto>,
    },
    TryCatch {
        body: Box<TreeDto>,
        handlers: Vec<HandlerDto>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerDto {
    pub exception_type: String,
    pub handler_body: TreeDto,
}

impl TryFrom<TreeDto> for IrNode {
    type Error = MalformedTree;

    fn try_from(dto: TreeDto) -> Result<Self, Self::Error> {
        let node = build(dto);
        node.validate()?;
        Ok(node)
    }
}

fn build(dto: TreeDto) -> IrNode {
    match dto {
        TreeDto::Call { identifier } => IrNode::Call { identifier },
        TreeDto::VarDecl { name, ty } => IrNode::VarDecl { name, ty },
        TreeDto::Sequence { children } => IrNode::Sequence {
            children: children.into_iter().map(build).collect(),
        },
        TreeDto::Branch { then_body, else_body } => IrNode::Branch {
            then_body: Box::new(build(*then_body)),
            else_body: else_body.map(|e| Box::new(build(*e))),
        },
        TreeDto::Loop { body } => IrNode::Loop {
            body: Box::new(build(*body)),
        },
        TreeDto::TryCatch { body, handlers } => IrNode::TryCatch {
            body: Box::new(build(*body)),
            handlers: handlers
                .into_iter()
                .map(|h| CatchHandler {
                    exception_type: h.exception_type,
                    handler_body: build(h.handler_body),
                })
                .collect(),
        },
    }
}

impl From<&IrNode> for TreeDto {
    fn from(node: &IrNode) -> Self {
        match node {
            IrNode::Call { identifier } => TreeDto::Call {
                identifier: identifier.clone(),
            },
            IrNode::VarDecl { name, ty } => TreeDto::VarDecl {
                name: name.clone(),
                ty: ty.clone(),
            },
            IrNode::Sequence { children } => TreeDto::Sequence {
                children: children.iter().map(TreeDto::from).collect(),
            },
            IrNode::Branch { then_body, else_body } => TreeDto::Branch {
                then_body: Box::new(TreeDto::from(then_body.as_ref())),
                else_body: else_body
                    .as_ref()
                    .map(|e| Box::new(TreeDto::from(e.as_ref()))),
            },
            IrNode::Loop { body } => TreeDto::Loop {
                body: Box::new(TreeDto::from(body.as_ref())),
            },
            IrNode::TryCatch { body, handlers } => TreeDto::TryCatch {
                body: Box::new(TreeDto::from(body.as_ref())),
                handlers: handlers
                    .iter()
                    .map(|h| HandlerDto {
                        exception_type: h.exception_type.clone(),
                        handler_body: TreeDto::from(&h.handler_body),
                    })
                    .collect(),
            },
        }
    }
}

/// Top-level evaluation report written by the reporting boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDto {
    pub units: Vec<UnitScores>,
}

impl From<Vec<UnitScores>> for ReportDto {
    fn from(units: Vec<UnitScores>) -> Self {
        ReportDto { units }
    }
}
