//! Role membership table loaded from the environment.
//!
//! Each role reads a comma-separated list of actor ids:
//! - `AUCTION_ADMINS`
//! - `AUCTION_APPS`
//! - `AUCTION_AUCTIONEERS`
//! - `AUCTION_COMPETITORS`
//!
//! Entries are trimmed and blank entries dropped. A missing variable means
//! the role has no members.

use std::collections::{HashMap, HashSet};
use std::env;

use crate::domain::actors::ActorId;
use crate::domain::role::{Role, RoleMembership};

fn env_var_for(role: Role) -> Option<&'static str> {
    match role {
        Role::Admin => Some("AUCTION_ADMINS"),
        Role::App => Some("AUCTION_APPS"),
        Role::Auctioneer => Some("AUCTION_AUCTIONEERS"),
        Role::Competitor => Some("AUCTION_COMPETITORS"),
        Role::Other => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    members: HashMap<Role, HashSet<ActorId>>,
}

impl RoleTable {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut members = HashMap::new();
        for role in Role::PRECEDENCE {
            let Some(key) = env_var_for(role) else {
                continue;
            };
            if let Some(raw) = lookup(key) {
                let ids = parse_id_list(&raw);
                if !ids.is_empty() {
                    members.insert(role, ids);
                }
            }
        }
        Self { members }
    }

    pub fn builder() -> RoleTableBuilder {
        RoleTableBuilder::default()
    }

    pub fn member_count(&self, role: Role) -> usize {
        self.members.get(&role).map_or(0, HashSet::len)
    }
}

fn parse_id_list(raw: &str) -> HashSet<ActorId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ActorId::new)
        .collect()
}

impl RoleMembership for RoleTable {
    fn members_of(&self, role: Role) -> HashSet<ActorId> {
        self.members.get(&role).cloned().unwrap_or_default()
    }

    fn is_member(&self, role: Role, actor: &ActorId) -> bool {
        self.members
            .get(&role)
            .is_some_and(|ids| ids.contains(actor))
    }
}

#[derive(Debug, Default)]
pub struct RoleTableBuilder {
    members: HashMap<Role, HashSet<ActorId>>,
}

impl RoleTableBuilder {
    pub fn member(mut self, role: Role, actor_id: impl Into<String>) -> Self {
        self.members
            .entry(role)
            .or_default()
            .insert(ActorId::new(actor_id));
        self
    }

    pub fn build(self) -> RoleTable {
        RoleTable {
            members: self.members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_ids() {
        let table = RoleTable::from_lookup(|key| match key {
            "AUCTION_AUCTIONEERS" => Some(" leiloeiro , ,other ".to_string()),
            "AUCTION_COMPETITORS" => Some("usutst".to_string()),
            _ => None,
        });

        assert_eq!(table.member_count(Role::Auctioneer), 2);
        assert!(table.is_member(Role::Auctioneer, &ActorId::new("leiloeiro")));
        assert!(table.is_member(Role::Auctioneer, &ActorId::new("other")));
        assert!(table.is_member(Role::Competitor, &ActorId::new("usutst")));
        assert_eq!(table.member_count(Role::Admin), 0);
    }

    #[test]
    fn blank_variables_mean_no_members() {
        let table = RoleTable::from_lookup(|_| Some("  , ".to_string()));
        for role in Role::PRECEDENCE {
            assert!(table.members_of(role).is_empty());
        }
    }

    #[test]
    fn other_role_is_never_configured() {
        let table = RoleTable::builder().member(Role::Other, "x").build();
        // The resolver never asks for Other; the table just stores what it is given.
        assert_eq!(table.member_count(Role::Other), 1);
        assert_eq!(env_var_for(Role::Other), None);
    }
}
