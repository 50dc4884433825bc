//! Field layouts of the events emitted by a Safe payload that configures a
//! Zodiac Roles modifier.
//!
//! Positions follow the argument order of the on-chain event definitions.
//! They are not validated against anything, so a reordering upstream shows up
//! as wrong values in the output, never as an error.

/// Expected JSON shape of a decoded argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Scalar,
    List,
}

/// One positional argument copied into the output under `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub index: usize,
    pub key: &'static str,
    pub shape: ValueShape,
}

/// How a recognized event is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchema {
    pub name: &'static str,
    /// Output key holding `raw.address`.
    pub emitter: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn scalar(index: usize, key: &'static str) -> FieldSpec {
    FieldSpec {
        index,
        key,
        shape: ValueShape::Scalar,
    }
}

const fn list(index: usize, key: &'static str) -> FieldSpec {
    FieldSpec {
        index,
        key,
        shape: ValueShape::List,
    }
}

const ROLES_MOD: &str = "roles_mod";

pub const EVENT_SCHEMAS: &[EventSchema] = &[
    // ERC20 approval granted by the Safe
    EventSchema {
        name: "Approval",
        emitter: "token",
        fields: &[scalar(0, "owner"), scalar(1, "spender"), scalar(2, "value")],
    },
    EventSchema {
        name: "ScopeTarget",
        emitter: ROLES_MOD,
        fields: &[scalar(0, "role"), scalar(1, "targetAddress")],
    },
    EventSchema {
        name: "RevokeTarget",
        emitter: ROLES_MOD,
        fields: &[scalar(0, "role"), scalar(1, "targetAddress")],
    },
    EventSchema {
        name: "ScopeAllowFunction",
        emitter: ROLES_MOD,
        fields: &[
            scalar(0, "role"),
            scalar(1, "targetAddress"),
            scalar(2, "selector"),
            scalar(3, "options"),
        ],
    },
    // paramType and paramComp are enum arrays the simulator does not decode
    // reliably, so their shape is left unchecked
    EventSchema {
        name: "ScopeFunction",
        emitter: ROLES_MOD,
        fields: &[
            scalar(0, "role"),
            scalar(1, "targetAddress"),
            scalar(2, "functionSig"),
            list(3, "isParamScoped"),
            scalar(4, "paramType"),
            scalar(5, "paramComp"),
            list(6, "compValue"),
            scalar(7, "options"),
        ],
    },
    EventSchema {
        name: "ScopeParameterAsOneOf",
        emitter: ROLES_MOD,
        fields: &[
            scalar(0, "role"),
            scalar(1, "targetAddress"),
            scalar(2, "functionSig"),
            scalar(3, "index"),
            scalar(4, "paramType"),
            list(5, "compValues"),
        ],
    },
    EventSchema {
        name: "ScopeRevokeFunction",
        emitter: ROLES_MOD,
        fields: &[
            scalar(0, "role"),
            scalar(1, "targetAddress"),
            scalar(2, "selector"),
        ],
    },
];

/// Exact, case-sensitive lookup.
pub fn schema_for(name: &str) -> Option<&'static EventSchema> {
    EVENT_SCHEMAS.iter().find(|schema| schema.name == name)
}
