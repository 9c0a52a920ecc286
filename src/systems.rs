use legion::world::SubWorld;
use legion::*;

use crate::body::Body;
use crate::collision;
use crate::components::*;

/// Number of frames in which the pair exchanged an impulse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactCount(pub u64);

#[system(for_each)]
pub fn integrate(body: &mut Body, #[resource] arena: &Arena) {
    body.integrate(arena);
}

/// Resolves the two lowest-priority bodies against each other.
#[system]
pub fn resolve_pair(
    world: &mut SubWorld,
    query: &mut Query<(&Id, &mut Body)>,
    #[resource] contacts: &mut ContactCount,
) {
    let mut bodies = query.iter_mut(world).collect::<Vec<_>>();
    bodies.sort_by_key(|(id, _)| **id);

    if let [(_, a), (_, b), ..] = bodies.as_mut_slice() {
        if collision::resolve(a, b) {
            contacts.0 += 1;
        }
    }
}

pub fn schedule() -> Schedule {
    Schedule::builder()
        .add_system(integrate_system())
        .flush()
        .add_system(resolve_pair_system())
        .build()
}
