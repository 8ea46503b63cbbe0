//! Stable hierarchical priority queue used to order thinning
//! candidates: a map-backed variant usable for any ordered key type,
//! and a vector-backed variant for small bounded integral key ranges.
//! Both satisfy the same stability contract — pop order is the stable
//! sort, by key, of the push order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod map_queue;
mod order;
mod queue;
mod vec_queue;

pub use map_queue::MapQueue;
pub use order::Order;
pub use queue::HierarchicalQueue;
pub use vec_queue::VecQueue;

#[cfg(test)]
mod equivalence {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn map_and_vec_backends_agree(
            ops in prop::collection::vec((0i64..16, any::<u16>()), 0..64)
        ) {
            let mut map_q: MapQueue<i64, u16> = MapQueue::new(Order::Ascending);
            let mut vec_q: VecQueue<u16> = VecQueue::new(0, 15, Order::Ascending);
            for (key, value) in &ops {
                map_q.push(*key, *value);
                vec_q.push(*key, *value);
            }
            loop {
                prop_assert_eq!(map_q.front(), vec_q.front());
                let a = map_q.pop();
                let b = vec_q.pop();
                prop_assert_eq!(a, b);
                if a.is_none() {
                    break;
                }
            }
        }
    }
}
