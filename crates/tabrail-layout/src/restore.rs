//! Layout restoration and snapshotting

use tabrail_tabs::{GroupCollection, SessionId};

use crate::layout::{GroupEntry, Layout, TabEntry, AUTO_TITLE};
use crate::Result;

/// The bridge's view of the external session manager.
///
/// `spawn_session` creates a session and returns its id so the bridge can
/// name it and forward its start command; everything else about the
/// session stays on the manager's side.
pub trait SessionSpawner {
    fn spawn_session(&mut self) -> SessionId;

    fn run_command(&mut self, session_id: SessionId, command: &str);
}

/// Rebuild the collection from a persisted layout.
///
/// `None` or an empty layout falls back to the bootstrap state: one
/// spawned default tab. Group entries without tabs get one default tab so
/// no restored group is left empty. Events are withheld until the whole
/// restoration is in place.
pub fn restore(
    collection: &mut GroupCollection,
    layout: Option<Layout>,
    sessions: &mut dyn SessionSpawner,
) -> Result<()> {
    let Some(layout) = layout.filter(|l| !l.is_empty()) else {
        tracing::info!("no layout to restore, starting with a default tab");
        let session_id = sessions.spawn_session();
        collection.add_tab(session_id, None)?;
        return Ok(());
    };

    collection.begin_update();
    let restored = restore_groups(collection, &layout, sessions);
    collection.end_update();
    restored?;

    tracing::info!(groups = collection.group_count(), "restored layout");
    Ok(())
}

fn restore_groups(
    collection: &mut GroupCollection,
    layout: &Layout,
    sessions: &mut dyn SessionSpawner,
) -> Result<()> {
    for entry in &layout.groups {
        let title = (!entry.name.is_empty()).then(|| entry.name.clone());
        collection.push_group(title, entry.locked);

        if entry.tabs.is_empty() {
            let session_id = sessions.spawn_session();
            collection.add_tab(session_id, None)?;
            continue;
        }

        let mut session_ids = Vec::with_capacity(entry.tabs.len());
        for tab in &entry.tabs {
            let session_id = sessions.spawn_session();
            collection.add_tab(session_id, None)?;

            if tab.name != AUTO_TITLE && !tab.name.is_empty() {
                collection.set_tab_title_interactive(session_id, &tab.name)?;
            }
            if let Some(exec) = tab.exec.as_deref().filter(|e| !e.is_empty()) {
                sessions.run_command(session_id, exec);
            }

            session_ids.push(session_id);
        }

        if let Some(&marked) = session_ids.get(entry.selected_tab()) {
            collection.select_tab(marked)?;
        }
    }

    let active = layout
        .selected_group()
        .min(collection.group_count().saturating_sub(1));
    collection.select_group(active)?;

    Ok(())
}

/// Capture the live collection as a layout description.
///
/// The active group and each group's selected tab carry the marker;
/// automatically titled tabs are written with the [`AUTO_TITLE`] sentinel
/// so a later restore regenerates their names.
pub fn snapshot(collection: &GroupCollection) -> Layout {
    let groups = collection
        .groups()
        .iter()
        .enumerate()
        .map(|(group_index, group)| {
            let selected_tab = if group.tabs.is_empty() {
                0
            } else {
                group.selected_tab.min(group.tabs.len() - 1)
            };

            GroupEntry {
                name: group.title.clone(),
                locked: group.locked,
                selected: group_index == collection.active_group_index(),
                tabs: group
                    .tabs
                    .iter()
                    .enumerate()
                    .map(|(tab_index, tab)| TabEntry {
                        name: if tab.title_is_user_set {
                            tab.title.clone()
                        } else {
                            AUTO_TITLE.to_string()
                        },
                        selected: tab_index == selected_tab,
                        exec: None,
                    })
                    .collect(),
            }
        })
        .collect();

    Layout { groups }
}
