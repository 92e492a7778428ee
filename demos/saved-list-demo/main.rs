//! Drives a saved list over an in-memory store without a terminal.
//!
//! Loads two pages, searches, clears the search, then imports data and
//! lets the notification reload the list. Each step prints the view.
//!
//! Run with `RUST_LOG=debug` to see the list's tracing output.

use bubbletea_rs::Cmd;
use saved_list::prelude::*;
use std::sync::Arc;

/// Runs commands until the list has nothing left to do, feeding each
/// resulting message back through `update` like the runtime would.
async fn settle(list: &mut SavedList, mut cmd: Option<Cmd>) {
    while let Some(next) = cmd.take() {
        let Some(msg) = next.await else { break };
        if let Some(failure) = msg.downcast_ref::<ErrorMsg>() {
            eprintln!("saved list failed: {}", failure.error);
            break;
        }
        cmd = list.update(msg);
    }
}

fn show(step: &str, list: &SavedList) {
    println!("── {step} ({} records)", list.len());
    println!("{}\n", list.view());
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = Arc::new(MemoryStore::new());
    for (id, name) in [
        ("saved-01", "List users"),
        ("saved-02", "Create order"),
        ("saved-03", "Écho health check"),
        ("saved-04", "~scratch"),
        ("saved-05", "Fetch invoices"),
    ] {
        store.insert("saved", SavedRecord::new(id).with_name(name)).await;
    }

    let bus = NotificationBus::new();
    let config = Config::default().with_page_limit(3).with_width(40);
    let mut list = SavedList::new(config).with_store(store.clone());

    let first = list.attach(bus.subscribe());
    settle(&mut list, first).await;
    show("first page", &list);

    let more = list.load_next();
    settle(&mut list, more).await;
    show("after load more", &list);

    let search = list.query("order");
    settle(&mut list, search).await;
    show("search \"order\"", &list);

    let cleared = list.query("");
    settle(&mut list, cleared).await;
    show("search cleared", &list);

    store
        .insert("saved", SavedRecord::new("saved-06").with_name("Imported request"))
        .await;
    bus.publish(Notification::DataImported);
    let reload = list.poll_notifications();
    settle(&mut list, reload).await;
    show("after import", &list);

    list.detach();
}
