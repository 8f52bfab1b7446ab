use super::{arrow, Composition, TokenHandle};
use crate::layout::summary::NET_CAPTION_FONT_SIZE;
use crate::layout::{SummaryLayout, SummaryStage};
use crate::molecule::TokenInstance;
use crate::pathway::NetYield;
use crate::scene::{palette, Billboard, Fragment, NodeId, SceneGraph};

fn stage_caption(stage: &SummaryStage) -> Fragment {
    let mut billboard = Billboard::new(
        stage.caption,
        stage.caption_font_size,
        stage.caption_color,
    );
    if stage.caption_bold {
        billboard = billboard.bold();
    }
    Fragment::label("label", billboard).at(stage.caption_offset)
}

fn insert_stage(
    graph: &mut SceneGraph,
    root: NodeId,
    stage: &SummaryStage,
    tokens: &mut Vec<TokenHandle>,
) {
    let group = graph.insert(
        Some(root),
        Fragment::group(stage.name)
            .at(stage.anchor)
            .with_child(stage_caption(stage)),
    );
    for (i, &(offset, kind)) in stage.tokens.iter().enumerate() {
        let name = format!("token_{i}");
        let token = graph.insert(
            Some(group),
            TokenInstance::new(offset, kind).fragment(&name),
        );
        let path = graph.node(token).map(|n| n.name.clone()).unwrap_or_default();
        let body = graph.find(&format!("{path}/body"));
        let caption = graph.find(&format!("{path}/caption"));
        if let (Some(body), Some(caption)) = (body, caption) {
            tokens.push(TokenHandle {
                kind,
                root: token,
                body,
                caption,
            });
        }
    }
}

/// Compose the whole-pathway energy diagram from `layout`.
#[must_use]
pub fn compose_summary(layout: &SummaryLayout) -> Composition {
    let mut graph = SceneGraph::new();
    let mut tokens = Vec::new();
    let root = graph.insert(None, Fragment::group("summary"));

    for stage in layout.stages {
        insert_stage(&mut graph, root, stage, &mut tokens);
    }

    for (i, spec) in layout.arrows.iter().enumerate() {
        if let Some(frag) = arrow(&format!("arrow_{i}"), spec) {
            let _ = graph.insert(Some(root), frag);
        }
    }

    let _ = graph.insert(
        Some(root),
        Fragment::label(
            "net_result",
            Billboard::new(
                NetYield::GLYCOLYSIS.summary(),
                NET_CAPTION_FONT_SIZE,
                palette::CARBOXYL,
            )
            .bold(),
        )
        .at(layout.net_caption),
    );

    log::debug!(
        "composed summary: {} nodes, {} tokens",
        graph.len(),
        tokens.len()
    );
    Composition { graph, tokens }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::molecule::TokenKind;
    use crate::scene::NodeContent;

    #[test]
    fn every_token_gets_a_handle() {
        let c = compose_summary(&SummaryLayout::canonical());
        assert_eq!(c.tokens.len(), 12);
        let atp = c.tokens.iter().filter(|t| t.kind == TokenKind::Atp).count();
        assert_eq!(atp, 4);
    }

    #[test]
    fn five_arrows_and_net_caption() {
        let c = compose_summary(&SummaryLayout::canonical());
        for i in 0..5 {
            assert!(c.graph.find(&format!("summary/arrow_{i}")).is_some());
        }
        let id = c.graph.find("summary/net_result").unwrap();
        let node = c.graph.node(id).unwrap();
        assert_eq!(node.transform.translation, Vec3::new(0.0, -3.0, 0.0));
        let NodeContent::Label(b) = &node.content else {
            unreachable!("net result is a label");
        };
        assert_eq!(b.text, "Net Result: +2 ATP, +2 NADH, 2 Pyruvate");
        assert!(b.bold);
    }

    #[test]
    fn captions_start_hidden() {
        let c = compose_summary(&SummaryLayout::canonical());
        let visible = c.graph.effective_visibility();
        for t in &c.tokens {
            assert!(!visible[t.caption.0 as usize]);
            assert!(visible[t.body.0 as usize]);
        }
    }

    #[test]
    fn stage_tokens_sit_on_their_anchor() {
        let c = compose_summary(&SummaryLayout::canonical());
        let world = c.graph.world_matrices();
        let id = c.graph.find("summary/pyruvate_output/token_1").unwrap();
        let pos = world[id.0 as usize].w_axis.truncate();
        assert!((pos - Vec3::new(5.0, 0.8, 0.0)).length() < 1e-6);
    }
}
