//! The pipeline lays out top-to-bottom. Left-to-right / right-to-left layouts swap node boxes
//! before ranking and swap the axes back afterwards; bottom-to-top / right-to-left also flip y.

use crate::LayoutGraph;
use crate::model::RankDir;

pub fn adjust(g: &mut LayoutGraph) {
    match g.graph().rankdir {
        RankDir::LR | RankDir::RL => swap_width_height(g),
        RankDir::TB | RankDir::BT => {}
    }
}

pub fn undo(g: &mut LayoutGraph) {
    match g.graph().rankdir {
        RankDir::BT | RankDir::RL => reverse_y(g),
        RankDir::TB | RankDir::LR => {}
    }

    match g.graph().rankdir {
        RankDir::LR | RankDir::RL => {
            swap_xy(g);
            swap_width_height(g);
        }
        RankDir::TB | RankDir::BT => {}
    }
}

fn swap_width_height(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_, n| {
        (n.width, n.height) = (n.height, n.width);
    });
}

fn reverse_y(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_, n| {
        if let Some(y) = n.y {
            n.y = Some(-y);
        }
    });
}

fn swap_xy(g: &mut LayoutGraph) {
    g.for_each_node_mut(|_, n| {
        (n.x, n.y) = (n.y, n.x);
    });
}
