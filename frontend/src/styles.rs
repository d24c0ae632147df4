pub const CONTAINER: &str = "min-h-screen bg-neutral-950 w-full px-4 sm:px-6 lg:px-8";
pub const CARD: &str = "bg-neutral-900 rounded-2xl shadow-lg p-6 border border-neutral-800";
pub const TEXT_H1: &str = "text-3xl font-bold text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-white";
pub const TEXT_BODY: &str = "text-neutral-200 text-base sm:text-lg leading-relaxed";
pub const TEXT_SMALL: &str = "text-sm text-neutral-400";

pub const BACKDROP: &str = "fixed inset-0 bg-black/80 backdrop-blur-sm flex items-center justify-center z-[300] p-4";
pub const OVERLAY: &str = "fixed inset-0 bg-black/90 backdrop-blur-sm flex items-center justify-center p-4";
pub const MODAL: &str = "relative bg-[#1A1A1A] rounded-2xl shadow-2xl w-full max-w-sm border border-green-500/20 overflow-hidden p-6 pt-8 text-center";
pub const VICTORY_CARD: &str = "rounded-2xl p-8 text-center max-w-md w-full border-2 border-green-500/50 shadow-2xl bg-gradient-to-br from-[#0a0d15] via-[#1a2238] to-[#0a0d15]";

pub const BUTTON_CTA: &str = "w-full font-bold text-base py-4 rounded-xl text-white bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 shadow-lg transition-all duration-300 ease-in-out transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed disabled:transform-none";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-6 py-3 rounded-xl font-bold text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transition-all duration-300";
