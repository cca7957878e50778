use std::collections::{HashMap, VecDeque};

use crate::{
    config::{dbs::LearntDBConfig, Activity, Config, LBD},
    host::{
        duplicates::DuplicateDB, BranchingHeuristics, DecisionLevel, DuplicateKey,
        DuplicateTracker, LearnedClauseSink, LearnedClauseSource, Trail,
    },
    structures::{
        atom::Atom,
        clause::{CClause, Tier},
        literal::{CLiteral, Literal},
    },
};

/// The index to a learnt clause.
pub type LearntIndex = u32;

/// A key to a clause stored in a [BasicHost].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LearntKey(LearntIndex);

impl LearntKey {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LearntKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Learnt({})", self.0)
    }
}

/// A learnt clause, together with the information used to decide whether the clause is kept.
#[derive(Clone, Debug)]
pub struct StoredLearnt {
    literals: CClause,
    lbd: LBD,
    tier: Tier,
    touched: u64,
    activity: Activity,
    attached: bool,
}

impl StoredLearnt {
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    pub fn lbd(&self) -> LBD {
        self.lbd
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The count of conflicts when the clause was last touched.
    pub fn touched(&self) -> u64 {
        self.touched
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// Bound on the window of recent lbd values.
const LBD_WINDOW: usize = 50;

/// Bound on the contribution of a single clause to the running lbd sum.
const LBD_SUM_CAP: LBD = 50;

/// A host holding a valuation and a tiered database of learnt clauses, without search.
///
/// Sufficient to import clauses as a solver would, and so used by the command line harness and by tests.
pub struct BasicHost {
    config: LearntDBConfig,

    valuation: Vec<Option<bool>>,

    /// Assignments, in order.
    trail: Vec<CLiteral>,

    /// The index of the trail at which each decision was made.
    decision_indices: Vec<usize>,

    satisfiable: bool,

    learnts: Vec<Option<StoredLearnt>>,

    /// Keys of learnt clauses by tier.
    tiers: HashMap<Tier, Vec<LearntKey>>,

    /// Keys of clauses watching a literal.
    watches: HashMap<CLiteral, Vec<LearntKey>>,

    duplicates: DuplicateDB,

    adaptive_branching: bool,

    conflicts: u64,

    /// Conflicts (real, or from imported clauses) noted by adaptive branching.
    conflicts_adaptive: u64,

    /// The lbd of the most recent learnt clauses.
    lbd_window: VecDeque<LBD>,

    /// Sum of the (capped) lbd of every learnt clause.
    lbd_sum: u64,

    atom_bump: Activity,

    /// An upper bound on the activity of every learnt clause.
    max_activity: Activity,
}

impl BasicHost {
    /// A fresh host at decision level zero, with configuration derived from `config`.
    pub fn new(config: &Config) -> Self {
        BasicHost {
            config: config.learnt_db.clone(),

            valuation: Vec::default(),
            trail: Vec::default(),
            decision_indices: Vec::default(),
            satisfiable: true,

            learnts: Vec::default(),
            tiers: HashMap::default(),
            watches: HashMap::default(),

            duplicates: DuplicateDB::new(config.tiers.min_learnt_copies.value),

            adaptive_branching: true,
            conflicts: 0,
            conflicts_adaptive: 0,
            lbd_window: VecDeque::with_capacity(LBD_WINDOW),
            lbd_sum: 0,

            atom_bump: config.learnt_db.atom_bump.value,
            max_activity: 0.0,
        }
    }

    /// Rescores the activity of every learnt clause and the clause bump, so both are at most one.
    fn rescale_clause_activity(&mut self) {
        let factor = 1.0 / Activity::max(self.max_activity, self.config.bump.value);
        for learnt in self.learnts.iter_mut().flatten() {
            learnt.activity *= factor;
        }
        self.max_activity *= factor;
        self.config.bump.value *= factor;
    }

    fn assign(&mut self, literal: CLiteral) {
        let index = literal.atom() as usize;
        if self.valuation.len() <= index {
            self.valuation.resize(index + 1, None);
        }
        self.valuation[index] = Some(literal.polarity());
        self.trail.push(literal);
    }

    /// Assigns the literal at decision level zero, without any check on the present value of the atom.
    pub fn assign_fact(&mut self, literal: CLiteral) {
        assert_eq!(self.decision_level(), 0, "facts are only asserted at level zero");
        self.assign(literal);
    }

    /// Assigns the literal as a decision, opening a fresh decision level.
    pub fn decide(&mut self, literal: CLiteral) {
        self.decision_indices.push(self.trail.len());
        self.assign(literal);
    }

    /// Removes every decision, and any consequence of a decision.
    pub fn backjump_to_zero(&mut self) {
        if let Some(&index) = self.decision_indices.first() {
            for literal in self.trail.drain(index..) {
                self.valuation[literal.atom() as usize] = None;
            }
        }
        self.decision_indices.clear();
    }

    /// Assignments, in order.
    pub fn trail(&self) -> &[CLiteral] {
        &self.trail
    }

    /// Stores a clause learnt by the host, as a local clause which is not yet attached.
    pub fn learn(&mut self, literals: &[CLiteral], lbd: LBD) -> LearntKey {
        let key = self.allocate_learnt(literals, lbd);
        self.mark_tier(key, Tier::Local);
        key
    }

    /// Removes a learnt clause, returning the clause if present.
    pub fn remove_learnt(&mut self, key: LearntKey) -> Option<StoredLearnt> {
        let removed = self.learnts.get_mut(key.index())?.take()?;

        if let Some(keys) = self.tiers.get_mut(&removed.tier) {
            keys.retain(|k| *k != key);
        }
        if removed.attached {
            for literal in removed.literals.iter().take(2) {
                if let Some(keys) = self.watches.get_mut(&literal.negate()) {
                    keys.retain(|k| *k != key);
                }
            }
        }
        Some(removed)
    }

    pub fn learnt(&self, key: LearntKey) -> Option<&StoredLearnt> {
        self.learnts.get(key.index())?.as_ref()
    }

    /// Keys of the clauses in a tier, in order of addition to the tier.
    pub fn tier(&self, tier: Tier) -> &[LearntKey] {
        self.tiers
            .get(&tier)
            .map(|keys| keys.as_slice())
            .unwrap_or_default()
    }

    /// Keys of the clauses watching for `literal` to be assigned.
    pub fn watchers(&self, literal: CLiteral) -> &[LearntKey] {
        self.watches
            .get(&literal)
            .map(|keys| keys.as_slice())
            .unwrap_or_default()
    }

    pub fn duplicates(&self) -> &DuplicateDB {
        &self.duplicates
    }

    pub fn set_adaptive_branching(&mut self, active: bool) {
        self.adaptive_branching = active;
    }

    pub fn set_conflicts(&mut self, conflicts: u64) {
        self.conflicts = conflicts;
    }

    /// Conflicts noted by adaptive branching.
    pub fn conflicts_adaptive(&self) -> u64 {
        self.conflicts_adaptive
    }

    /// The lbd of the most recent learnt clauses, oldest first.
    pub fn lbd_window(&self) -> impl Iterator<Item = &LBD> {
        self.lbd_window.iter()
    }

    pub fn lbd_sum(&self) -> u64 {
        self.lbd_sum
    }

    /// The activity with which the next clause will be bumped.
    pub fn clause_bump(&self) -> Activity {
        self.config.bump.value
    }

    /// The activity with which the next atom will be bumped.
    pub fn atom_bump(&self) -> Activity {
        self.atom_bump
    }
}

impl Trail for BasicHost {
    fn decision_level(&self) -> DecisionLevel {
        self.decision_indices.len() as DecisionLevel
    }

    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    fn enqueue_forced(&mut self, literal: CLiteral) {
        self.assign(literal);
    }

    fn is_satisfiable(&self) -> bool {
        self.satisfiable
    }

    fn set_unsatisfiable(&mut self) {
        self.satisfiable = false;
    }
}

impl LearnedClauseSink for BasicHost {
    type Key = LearntKey;

    fn allocate_learnt(&mut self, literals: &[CLiteral], lbd: LBD) -> Self::Key {
        let key = LearntKey(self.learnts.len() as LearntIndex);
        self.learnts.push(Some(StoredLearnt {
            literals: literals.to_vec(),
            lbd,
            tier: Tier::Local,
            touched: 0,
            activity: 0.0,
            attached: false,
        }));
        key
    }

    fn mark_tier(&mut self, key: Self::Key, tier: Tier) {
        if let Some(Some(learnt)) = self.learnts.get_mut(key.index()) {
            if let Some(keys) = self.tiers.get_mut(&learnt.tier) {
                keys.retain(|k| *k != key);
            }
            learnt.tier = tier;
            self.tiers.entry(tier).or_default().push(key);
        }
    }

    fn set_touched(&mut self, key: Self::Key, conflicts: u64) {
        if let Some(Some(learnt)) = self.learnts.get_mut(key.index()) {
            learnt.touched = conflicts;
        }
    }

    /// Bumps the activity of a clause, rescoring all activities if needed.
    fn bump_clause_activity(&mut self, key: Self::Key) {
        if self.max_activity + self.config.bump.value > self.config.bump.max {
            self.rescale_clause_activity();
        }

        if let Some(Some(learnt)) = self.learnts.get_mut(key.index()) {
            learnt.activity += self.config.bump.value;
            self.max_activity = Activity::max(self.max_activity, learnt.activity);
        }
    }

    fn attach(&mut self, key: Self::Key) {
        if let Some(Some(learnt)) = self.learnts.get_mut(key.index()) {
            if learnt.attached {
                return;
            }
            learnt.attached = true;
            // A clause watches for the negation of its first two literals.
            for literal in learnt.literals.iter().take(2) {
                self.watches.entry(literal.negate()).or_default().push(key);
            }
        }
    }

    /// Increases the activity applied to future bumps, in place of decaying every clause.
    fn decay_clause_activity(&mut self) {
        self.config.bump.value *= 1.0 / (1.0 - self.config.decay.value);
        if self.config.bump.value > self.config.bump.max {
            self.rescale_clause_activity();
        }
    }
}

impl LearnedClauseSource for BasicHost {
    type Key = LearntKey;

    fn learnt_literals(&self, key: Self::Key) -> Option<&[CLiteral]> {
        self.learnt(key).map(|learnt| learnt.literals())
    }
}

impl DuplicateTracker for BasicHost {
    fn duplicate_signal(&mut self, key: &DuplicateKey) -> u32 {
        self.duplicates.duplicate_signal(key)
    }
}

impl BranchingHeuristics for BasicHost {
    fn adaptive_branching(&self) -> bool {
        self.adaptive_branching
    }

    fn record_imported_lbd(&mut self, lbd: LBD) {
        self.conflicts_adaptive += 1;
        if self.lbd_window.len() == LBD_WINDOW {
            self.lbd_window.pop_front();
        }
        self.lbd_window.push_back(lbd);
        self.lbd_sum += lbd.min(LBD_SUM_CAP) as u64;
    }

    /// Increases the activity applied to future bumps of atoms.
    ///
    /// No atom activities are held, so past the maximum only the bump is rescored.
    fn decay_atom_activity(&mut self) {
        self.atom_bump *= 1.0 / (1.0 - self.config.atom_decay.value);
        if self.atom_bump > self.config.atom_bump.max {
            self.atom_bump = 1.0;
        }
    }

    fn conflicts(&self) -> u64 {
        self.conflicts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backjump_clears_decisions() {
        let mut host = BasicHost::new(&Config::default());
        host.assign_fact(CLiteral::new(0, true));
        host.decide(CLiteral::new(1, false));
        host.enqueue_forced(CLiteral::new(2, true));

        assert_eq!(host.decision_level(), 1);
        assert_eq!(host.value_of(2), Some(true));

        host.backjump_to_zero();

        assert_eq!(host.decision_level(), 0);
        assert_eq!(host.value_of(0), Some(true));
        assert_eq!(host.value_of(1), None);
        assert_eq!(host.value_of(2), None);
        assert_eq!(host.trail(), &[CLiteral::new(0, true)]);
    }

    #[test]
    fn removal() {
        let mut host = BasicHost::new(&Config::default());
        let p = CLiteral::new(3, true);
        let q = CLiteral::new(5, false);

        let key = host.allocate_learnt(&[p, q], 2);
        host.mark_tier(key, Tier::Core);
        host.attach(key);

        assert_eq!(host.tier(Tier::Core), &[key]);
        assert_eq!(host.watchers(p.negate()), &[key]);

        assert!(host.remove_learnt(key).is_some());
        assert!(host.learnt_literals(key).is_none());
        assert!(host.tier(Tier::Core).is_empty());
        assert!(host.watchers(p.negate()).is_empty());
        assert!(host.remove_learnt(key).is_none());
    }

    #[test]
    fn retiering() {
        let mut host = BasicHost::new(&Config::default());
        let key = host.learn(&[CLiteral::new(1, true), CLiteral::new(2, true)], 2);
        assert_eq!(host.tier(Tier::Local), &[key]);

        host.mark_tier(key, Tier::Tier2);
        assert!(host.tier(Tier::Local).is_empty());
        assert_eq!(host.tier(Tier::Tier2), &[key]);
    }

    #[test]
    fn activity_rescale() {
        let mut config = Config::default();
        config.learnt_db.bump.max = 8.0;
        config.learnt_db.decay.value = 0.5;
        let mut host = BasicHost::new(&config);

        let key = host.learn(&[CLiteral::new(1, true), CLiteral::new(2, true)], 2);
        for _ in 0..6 {
            host.bump_clause_activity(key);
            host.decay_clause_activity();
        }

        let activity = host.learnt(key).map(|learnt| learnt.activity()).unwrap_or(0.0);
        assert!(activity <= 8.0 + host.clause_bump());
        assert!(activity > 0.0);
    }

    #[test]
    fn bump_bounded_without_bumps() {
        let mut config = Config::default();
        config.learnt_db.bump.max = 1e6;
        config.learnt_db.decay.value = 0.5;
        config.learnt_db.atom_bump.max = 1e6;
        config.learnt_db.atom_decay.value = 0.5;
        let mut host = BasicHost::new(&config);

        let key = host.learn(&[CLiteral::new(1, true), CLiteral::new(2, true)], 2);
        host.bump_clause_activity(key);

        for _ in 0..2048 {
            host.decay_clause_activity();
            host.decay_atom_activity();
        }

        assert!(host.clause_bump().is_finite() && host.clause_bump() <= 1e6);
        assert!(host.atom_bump().is_finite() && host.atom_bump() <= 1e6);

        host.bump_clause_activity(key);
        let activity = host.learnt(key).map(|learnt| learnt.activity()).unwrap_or(Activity::NAN);
        assert!(activity.is_finite() && activity > 0.0);
    }

    #[test]
    fn rescale_keeps_order() {
        let mut config = Config::default();
        config.learnt_db.bump.max = 16.0;
        config.learnt_db.decay.value = 0.5;
        let mut host = BasicHost::new(&config);

        let older = host.learn(&[CLiteral::new(1, true), CLiteral::new(2, true)], 2);
        let newer = host.learn(&[CLiteral::new(3, true), CLiteral::new(4, true)], 2);

        host.bump_clause_activity(older);
        for _ in 0..8 {
            host.decay_clause_activity();
        }
        host.bump_clause_activity(newer);

        let activity = |key| host.learnt(key).map(|learnt| learnt.activity()).unwrap_or(Activity::NAN);
        assert!(activity(newer) > activity(older));
        assert!(activity(newer) <= 16.0);
    }
}
