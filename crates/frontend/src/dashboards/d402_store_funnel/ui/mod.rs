mod funnel_view;

pub use funnel_view::StoreFunnelView;
