use crate::session::SearchSession;

pub fn handle_mount(session: &mut SearchSession) {
    session.mount();
    tracing::info!("View mounted, shortcuts registered");
}

pub fn handle_unmount(session: &mut SearchSession) {
    if !session.is_mounted() {
        tracing::debug!("Unmount without a mounted view");
    }
    session.unmount();
    tracing::info!("View unmounted, shortcuts released");
}
